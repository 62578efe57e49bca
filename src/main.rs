use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};

use indefinite::{ArticleResolver, PhraseReader, ReadStats, ReaderConfig, Resolution, RunStats};

#[derive(Parser, Debug)]
#[command(name = "indefinite")]
#[command(about = "Prefix words and phrases with \"a\" or \"an\"")]
#[command(version)]
struct Args {
    /// Phrases to resolve; stdin is read when no phrases or files are given
    phrases: Vec<String>,

    /// Read phrases from a file, one per line (repeatable)
    #[arg(long = "file", short = 'f')]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Append the deciding rule to plain output
    #[arg(long)]
    explain: bool,

    /// Abort on first unreadable file
    #[arg(long)]
    fail_fast: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// "<article> <phrase>"
    Plain,
    /// Only the article
    Article,
    /// One JSON object per line
    Json,
}

/// One line of JSON output
#[derive(Serialize)]
struct OutputRecord<'a> {
    phrase: &'a str,
    #[serde(flatten)]
    resolution: Resolution<'a>,
}

fn write_resolution<W: Write>(
    out: &mut W,
    phrase: &str,
    resolution: &Resolution<'_>,
    format: OutputFormat,
    explain: bool,
) -> Result<()> {
    match format {
        OutputFormat::Plain if explain => {
            writeln!(out, "{} {}\t[{}]", resolution.article, phrase, resolution.reason)?
        }
        OutputFormat::Plain => writeln!(out, "{} {}", resolution.article, phrase)?,
        OutputFormat::Article => writeln!(out, "{}", resolution.article)?,
        OutputFormat::Json => {
            let record = OutputRecord { phrase, resolution: *resolution };
            writeln!(out, "{}", serde_json::to_string(&record)?)?
        }
    }
    Ok(())
}

/// Surface a source's read error on stderr; its phrases read so far are still resolved
fn report_read_error(read_stats: &ReadStats) {
    if let Some(ref error) = read_stats.read_error {
        warn!("Input {} was not fully read: {}", read_stats.source, error);
        eprintln!("indefinite: {error}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: logs go to stderr so stdout stays clean for piping resolved phrases
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let start_time = std::time::Instant::now();
    let resolver = ArticleResolver::new()?;
    let reader = PhraseReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    });

    let mut stats = RunStats::new();
    let mut batches: Vec<Vec<String>> = Vec::new();

    if !args.phrases.is_empty() {
        batches.push(args.phrases.clone());
    }

    let mut sources = reader.read_files_batch(&args.files).await?;
    if args.phrases.is_empty() && args.files.is_empty() {
        sources.push(reader.read_stdin().await?);
    }

    for (phrases, read_stats) in sources {
        report_read_error(&read_stats);
        stats.add_source(read_stats);
        batches.push(phrases);
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for phrase in batches.iter().flatten() {
        let resolution = resolver.explain(phrase);
        stats.record(&resolution);
        write_resolution(&mut out, phrase, &resolution, args.format, args.explain)?;
    }
    out.flush()?;

    stats.total_time_ms = start_time.elapsed().as_millis() as u64;
    info!(
        "Resolved {} phrases ({} a, {} an) from {} sources, {} failed",
        stats.phrases_resolved,
        stats.a_count,
        stats.an_count,
        stats.sources.len(),
        stats.failed_sources()
    );

    if let Some(ref stats_path) = args.stats_out {
        stats.save(stats_path).await?;
        info!("Stats written to {}", stats_path.display());
    }

    Ok(())
}
