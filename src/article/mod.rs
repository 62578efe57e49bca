// WHY: Main resolver interface: phonetic exceptions first, then letter-name
// reading for initialisms, then the plain vowel-letter check

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use tracing::{trace, warn};

pub mod initialism;
pub mod rules;
pub mod token;

pub use initialism::InitialismDetector;
pub use rules::{Rule, RuleGroup, VOWEL_SOUND_LETTERS};
pub use token::first_token;

/// Indefinite article preceding a word when spoken aloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    A,
    An,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::A => "a",
            Article::An => "an",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which step of the decision produced the article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// No token in the input
    EmptyInput,
    /// Consonant spelling, vowel sound ("hour")
    SilentConsonant { rule: &'static str },
    /// Vowel spelling, consonant sound ("user", "one")
    ConsonantSound { rule: &'static str },
    /// Written vowel letter first ("apple")
    LeadingVowel,
    /// Read as letter names, decided by the first letter's name
    Initialism { letter: char },
    /// Nothing else applied
    LeadingConsonant,
}

impl Reason {
    pub fn is_exception(&self) -> bool {
        matches!(self, Reason::SilentConsonant { .. } | Reason::ConsonantSound { .. })
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::EmptyInput => f.write_str("empty input"),
            Reason::SilentConsonant { rule } => write!(f, "silent consonant ({rule})"),
            Reason::ConsonantSound { rule } => write!(f, "consonant sound ({rule})"),
            Reason::LeadingVowel => f.write_str("leading vowel letter"),
            Reason::Initialism { letter } => write!(f, "initialism, letter name '{letter}'"),
            Reason::LeadingConsonant => f.write_str("leading consonant letter"),
        }
    }
}

/// Article decision together with the token examined and why
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub article: Article,
    pub token: Option<&'a str>,
    pub reason: Reason,
}

impl<'a> Resolution<'a> {
    fn new(article: Article, token: Option<&'a str>, reason: Reason) -> Self {
        Self { article, token, reason }
    }
}

/// Resolver holding the compiled rule tables
///
/// Immutable once built, so a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct ArticleResolver {
    silent_consonant: RuleGroup,
    consonant_sound: RuleGroup,
    leading_vowel: RuleGroup,
    initialisms: InitialismDetector,
    vowel_sound_letters: HashSet<char>,
}

impl ArticleResolver {
    /// Compile all rule tables
    pub fn new() -> Result<Self> {
        Ok(Self {
            silent_consonant: RuleGroup::compile("silent-consonant", rules::SILENT_CONSONANT_RULES)?,
            consonant_sound: RuleGroup::compile("consonant-sound", rules::CONSONANT_SOUND_RULES)?,
            leading_vowel: RuleGroup::compile("leading-vowel", rules::LEADING_VOWEL_RULES)?,
            initialisms: InitialismDetector::new()?,
            vowel_sound_letters: VOWEL_SOUND_LETTERS.iter().copied().collect(),
        })
    }

    /// Article for `phrase`; only its first token is considered
    pub fn resolve(&self, phrase: &str) -> Article {
        self.explain(phrase).article
    }

    /// Same decision as [`resolve`](Self::resolve), reporting the token and reason
    pub fn explain<'a>(&self, phrase: &'a str) -> Resolution<'a> {
        let Some(token) = first_token(phrase) else {
            return Resolution::new(Article::A, None, Reason::EmptyInput);
        };

        let resolution = self.classify(token);
        trace!(token, article = %resolution.article, reason = %resolution.reason, "Resolved article");
        resolution
    }

    fn classify<'a>(&self, token: &'a str) -> Resolution<'a> {
        if let Some(rule) = self.silent_consonant.first_match(token) {
            return Resolution::new(rule.article, Some(token), Reason::SilentConsonant { rule: rule.label });
        }

        if let Some(rule) = self.consonant_sound.first_match(token) {
            return Resolution::new(rule.article, Some(token), Reason::ConsonantSound { rule: rule.label });
        }

        if let Some(rule) = self.leading_vowel.first_match(token) {
            return Resolution::new(rule.article, Some(token), Reason::LeadingVowel);
        }

        if self.initialisms.is_likely_initialism(token) {
            if let Some(letter) = token::leading_char_lowercase(token) {
                let article = if self.vowel_sound_letters.contains(&letter) {
                    Article::An
                } else {
                    Article::A
                };
                return Resolution::new(article, Some(token), Reason::Initialism { letter });
            }
        }

        // WHY: plain spelling check once every phonetic rule has passed
        match token::leading_char_lowercase(token) {
            Some('a' | 'e' | 'i' | 'o' | 'u') => {
                Resolution::new(Article::An, Some(token), Reason::LeadingVowel)
            }
            _ => Resolution::new(Article::A, Some(token), Reason::LeadingConsonant),
        }
    }

    /// `"<article> <phrase>"` with the phrase echoed verbatim
    pub fn with_article(&self, phrase: &str) -> String {
        format!("{} {}", self.resolve(phrase), phrase)
    }

    pub fn is_likely_initialism(&self, token: &str) -> bool {
        self.initialisms.is_likely_initialism(token)
    }
}

static SHARED_RESOLVER: OnceLock<Option<ArticleResolver>> = OnceLock::new();

/// Process-wide resolver, built on first use
/// WHY: `None` only if the built-in tables fail to compile; callers then degrade to "a"
pub fn shared_resolver() -> Option<&'static ArticleResolver> {
    SHARED_RESOLVER
        .get_or_init(|| match ArticleResolver::new() {
            Ok(resolver) => Some(resolver),
            Err(e) => {
                warn!("Article rules failed to compile, defaulting to \"a\": {:#}", e);
                None
            }
        })
        .as_ref()
}

/// Choose "a" or "an" for a word or phrase. Never fails; empty input gives "a".
pub fn resolve_article(phrase: &str) -> Article {
    shared_resolver().map_or(Article::A, |resolver| resolver.resolve(phrase))
}

/// [`resolve_article`] for callers that may have no text at all
pub fn resolve_article_opt(phrase: Option<&str>) -> Article {
    phrase.map_or(Article::A, resolve_article)
}

/// Explain the decision [`resolve_article`] would make
pub fn explain(phrase: &str) -> Resolution<'_> {
    match shared_resolver() {
        Some(resolver) => resolver.explain(phrase),
        None => Resolution::new(Article::A, first_token(phrase), Reason::LeadingConsonant),
    }
}

/// Prefix `phrase` with its indefinite article: "an hour", "a Mother"
pub fn with_article(phrase: &str) -> String {
    format!("{} {}", resolve_article(phrase), phrase)
}

/// Whether `token` is likely read as letter names ("FBI", "M.B.A.", "MSc")
pub fn is_likely_initialism(token: &str) -> bool {
    shared_resolver().is_some_and(|resolver| resolver.is_likely_initialism(token))
}
