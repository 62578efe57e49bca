// WHY: Centralized phonetic exception tables for article resolution
// Spelling alone misleads on silent "h", "you"-sound "u"/"eu" and "w"-sound "one"

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use tracing::debug;

use super::Article;

/// A single phonetic rule: a start-of-token pattern and the article it forces
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Short identifier reported by explanations and debug logs
    pub label: &'static str,
    /// Pattern anchored at the start of the token, case-insensitive over ASCII only
    pub pattern: &'static str,
    pub article: Article,
}

/// Words pronounced with an initial vowel sound despite a consonant spelling
pub const SILENT_CONSONANT_RULES: &[Rule] = &[Rule {
    label: "silent-h",
    pattern: r"(?i-u)^(honest|honor|hour|heir|honou?r|heirloom)",
    article: Article::An,
}];

/// Words spelled with a leading vowel but spoken with a consonant sound
pub const CONSONANT_SOUND_RULES: &[Rule] = &[
    Rule {
        label: "w-sound",
        pattern: r"(?i-u)^(one|once)",
        article: Article::A,
    },
    Rule {
        label: "you-sound",
        pattern: r"^(?:(?i-u:uni)(?:[^nN]|$)|(?i-u:unicorn|university|useful|user|utensil|euro|european|eulogy))",
        article: Article::A,
    },
];

/// Catch-all for tokens written with a leading vowel letter
/// WHY: evaluated after CONSONANT_SOUND_RULES so "user" and "one" keep their "a"
pub const LEADING_VOWEL_RULES: &[Rule] = &[Rule {
    label: "vowel-letter",
    pattern: r"(?i-u)^[aeiou]",
    article: Article::An,
}];

/// Letters whose spoken *names* begin with a vowel sound ("ef", "em", "ex", ...)
pub const VOWEL_SOUND_LETTERS: &[char] = &[
    'a', 'e', 'f', 'h', 'i', 'l', 'm', 'n', 'o', 'r', 's', 'x',
];

/// Rule with its pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub label: &'static str,
    pub article: Article,
    regex: Regex,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Result<Self> {
        let regex = Regex::new(rule.pattern)
            .with_context(|| format!("Failed to compile rule '{}': {}", rule.label, rule.pattern))?;
        Ok(Self {
            label: rule.label,
            article: rule.article,
            regex,
        })
    }

    pub fn matches(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

/// Ordered group of rules; the first matching rule wins
#[derive(Debug, Clone)]
pub struct RuleGroup {
    name: &'static str,
    rules: Vec<CompiledRule>,
}

impl RuleGroup {
    /// Compile every rule of `table`, preserving its order
    pub fn compile(name: &'static str, table: &[Rule]) -> Result<Self> {
        let rules = table
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>>>()?;

        debug!("Compiled rule group '{}' with {} rules", name, rules.len());

        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule in table order whose pattern matches the token
    pub fn first_match(&self, token: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.matches(token))
    }
}
