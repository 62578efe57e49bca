use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::article::token::BYTE_ORDER_MARK;

/// Label used in stats for phrases read from standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Configuration for phrase reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and pipes
        }
    }
}

/// Statistics for one phrase source
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReadStats {
    pub source: String,
    pub lines_read: u64,
    /// Non-blank lines, the ones that become phrases
    pub phrases_read: u64,
    /// Bytes consumed from the source, line terminators included
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async reader that streams phrases line-by-line from files or stdin
pub struct PhraseReader {
    config: ReaderConfig,
}

impl PhraseReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read one phrase per line from a file
    /// Blank lines carry no token and are skipped
    pub async fn read_phrases<P: AsRef<Path>>(&self, file_path: P) -> Result<(Vec<String>, ReadStats)> {
        let path = file_path.as_ref();
        let source = path.display().to_string();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of phrase file: {}", source);

        // WHY: early validation gives clear error context before any partial output
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", source, e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }

                let stats = ReadStats {
                    source,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: Some(error_msg),
                    ..Default::default()
                };
                return Ok((Vec::new(), stats));
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        self.read_lines(reader, source, start_time).await
    }

    /// Read one phrase per line from standard input
    pub async fn read_stdin(&self) -> Result<(Vec<String>, ReadStats)> {
        let start_time = std::time::Instant::now();
        let reader = BufReader::with_capacity(self.config.buffer_size, tokio::io::stdin());
        self.read_lines(reader, STDIN_SOURCE.to_string(), start_time).await
    }

    async fn read_lines<R>(
        &self,
        mut reader: R,
        source: String,
        start_time: std::time::Instant,
    ) -> Result<(Vec<String>, ReadStats)>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buffer = String::new();
        let mut phrases = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer).await {
                Ok(0) => break,
                Ok(consumed) => {
                    // WHY: read_line reports the bytes actually consumed, terminator included
                    byte_count += consumed as u64;
                    line_count += 1;

                    let mut line = buffer.strip_suffix('\n').unwrap_or(buffer.as_str());
                    line = line.strip_suffix('\r').unwrap_or(line);
                    if line_count == 1 {
                        line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
                    }

                    if !line.trim().is_empty() {
                        phrases.push(line.to_string());
                    }
                }
                Err(e) => {
                    let error_msg = format!(
                        "Read error in {} at line {}: {}",
                        source,
                        line_count + 1,
                        e
                    );
                    warn!("{}", error_msg);

                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }

                    // Return partial results with error information
                    let stats = ReadStats {
                        source,
                        lines_read: line_count,
                        phrases_read: phrases.len() as u64,
                        bytes_read: byte_count,
                        duration_ms: start_time.elapsed().as_millis() as u64,
                        read_error: Some(error_msg),
                    };
                    return Ok((phrases, stats));
                }
            }
        }

        let stats = ReadStats {
            source,
            lines_read: line_count,
            phrases_read: phrases.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: None,
        };

        info!(
            "Read {}: {} lines, {} phrases, {} bytes in {}ms",
            stats.source, stats.lines_read, stats.phrases_read, stats.bytes_read, stats.duration_ms
        );

        Ok((phrases, stats))
    }

    /// Read several phrase files in order
    pub async fn read_files_batch<P: AsRef<Path>>(
        &self,
        file_paths: &[P],
    ) -> Result<Vec<(Vec<String>, ReadStats)>> {
        info!("Starting batch read of {} phrase files", file_paths.len());

        let mut results = Vec::with_capacity(file_paths.len());

        // WHY: sequential reading keeps output in the order files were given
        for file_path in file_paths {
            results.push(self.read_phrases(file_path).await?);
        }

        Ok(results)
    }
}
