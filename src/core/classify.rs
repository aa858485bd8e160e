//! Translatability heuristics for string leaves.
//!
//! The classifier is an ordered table of `(predicate, outcome)` rules. The
//! first rule whose predicate holds and whose outcome is final decides;
//! a string no rule accepts is not translatable.
//!
//! Structural rejects come first so that a key match can never rescue a
//! number, hash or identifier. The ASCII-only reject is soft: it only
//! stands if no accept rule later in the table fires.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest and longest trimmed text (in characters) worth translating.
pub const MIN_TEXT_CHARS: usize = 2;
pub const MAX_TEXT_CHARS: usize = 1000;

/// Hex strings longer than this are treated as hashes.
const HASH_MIN_CHARS: usize = 9;

/// Field names that mark a value as player-facing text. Matched as
/// substrings of the lower-cased key.
pub const DEFAULT_KEY_FIELDS: &[&str] = &[
    "text",
    "parameters",
    "name",
    "description",
    "message1",
    "message2",
    "message3",
    "message4",
    "note",
    "memo",
    "help",
    "hint",
    "caption",
    "label",
    "title",
    "content",
    "message",
    "comment",
    "info",
    "detail",
    "summary",
    "abstract",
];

/// Key substring to context label. First match wins.
const CONTEXT_LABELS: &[(&str, &str)] = &[
    ("name", "name-like"),
    ("text", "text"),
    ("message", "message"),
    ("description", "description"),
    ("title", "title"),
    ("content", "content"),
    ("note", "note"),
    ("memo", "memo"),
    ("comment", "comment"),
    ("label", "label"),
    ("caption", "caption"),
    ("hint", "hint"),
    ("help", "help"),
    ("info", "info"),
    ("detail", "detail"),
    ("summary", "summary"),
    ("abstract", "summary"),
];

const DEFAULT_CONTEXT_LABEL: &str = "text";

static SYMBOLS_ONLY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[0-9\s\-_.,;:!?()\[\]{}"'`~@#$%^&*+=|\\/<>]+$"##).unwrap()
});

static ASCII_ONLY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[a-zA-Z0-9\s\-_.,;:!?()\[\]{}"'`~@#$%^&*+=|\\/<>]+$"##).unwrap()
});

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    TooShort,
    TooLong,
    /// Digits, whitespace and ASCII punctuation only.
    SymbolsOnly,
    /// No character outside ASCII letters, digits and punctuation.
    AsciiOnly,
    DigitsOnly,
    /// `[A-Za-z0-9_]+`, i.e. looks like an identifier.
    IdentifierShaped,
    /// Pure hex longer than eight characters.
    HashLike,
    /// Lower-cased key contains any of these substrings.
    KeyContains(Vec<String>),
    /// Contains kana (U+3040–U+30FF) or CJK ideographs (U+4E00–U+9FAF).
    ContainsCjk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reject,
    /// Rejected unless a later accept rule fires.
    SoftReject,
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub predicate: Predicate,
    pub outcome: Outcome,
}

impl Rule {
    pub fn new(predicate: Predicate, outcome: Outcome) -> Self {
        Self { predicate, outcome }
    }
}

impl Predicate {
    /// `text` is already trimmed; `key_lower` is already lower-cased.
    fn holds(&self, text: &str, key_lower: &str) -> bool {
        match self {
            Predicate::TooShort => text.chars().count() < MIN_TEXT_CHARS,
            Predicate::TooLong => text.chars().count() > MAX_TEXT_CHARS,
            Predicate::SymbolsOnly => SYMBOLS_ONLY_REGEX.is_match(text),
            Predicate::AsciiOnly => ASCII_ONLY_REGEX.is_match(text),
            Predicate::DigitsOnly => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
            Predicate::IdentifierShaped => {
                !text.is_empty()
                    && text
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
            }
            Predicate::HashLike => {
                text.len() >= HASH_MIN_CHARS && text.bytes().all(|b| b.is_ascii_hexdigit())
            }
            Predicate::KeyContains(fields) => {
                fields.iter().any(|field| key_lower.contains(field.as_str()))
            }
            Predicate::ContainsCjk => contains_cjk(text),
        }
    }
}

/// True if any character is kana or a CJK ideograph.
pub fn contains_cjk(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{3040}'..='\u{30FF}' | '\u{4E00}'..='\u{9FAF}'))
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_key_fields(DEFAULT_KEY_FIELDS.iter().map(|s| s.to_string()).collect())
    }
}

impl Classifier {
    /// Build the standard rule table around a key vocabulary.
    pub fn with_key_fields(key_fields: Vec<String>) -> Self {
        let key_fields = key_fields
            .into_iter()
            .map(|field| field.to_lowercase())
            .filter(|field| !field.is_empty())
            .collect();

        let rules = vec![
            Rule::new(Predicate::TooShort, Outcome::Reject),
            Rule::new(Predicate::TooLong, Outcome::Reject),
            Rule::new(Predicate::SymbolsOnly, Outcome::Reject),
            Rule::new(Predicate::DigitsOnly, Outcome::Reject),
            Rule::new(Predicate::HashLike, Outcome::Reject),
            Rule::new(Predicate::IdentifierShaped, Outcome::Reject),
            Rule::new(Predicate::AsciiOnly, Outcome::SoftReject),
            Rule::new(Predicate::KeyContains(key_fields), Outcome::Accept),
            Rule::new(Predicate::ContainsCjk, Outcome::Accept),
        ];

        Self { rules }
    }

    /// Default vocabulary plus project-specific field names.
    pub fn with_extra_key_fields(extra: &[String]) -> Self {
        let mut fields: Vec<String> = DEFAULT_KEY_FIELDS.iter().map(|s| s.to_string()).collect();
        fields.extend(extra.iter().cloned());
        Self::with_key_fields(fields)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Decide whether `text` under `key` is natural-language content.
    pub fn is_translatable(&self, text: &str, key: &str) -> bool {
        let text = text.trim();
        let key_lower = key.to_lowercase();

        for rule in &self.rules {
            if !rule.predicate.holds(text, &key_lower) {
                continue;
            }
            match rule.outcome {
                Outcome::Reject => return false,
                // Stands unless a later rule accepts.
                Outcome::SoftReject => {}
                Outcome::Accept => return true,
            }
        }

        false
    }
}

/// [`Classifier::is_translatable`] with the default vocabulary.
pub fn is_translatable(text: &str, key: &str) -> bool {
    DEFAULT_CLASSIFIER.is_translatable(text, key)
}

/// Map a key to its human-readable context label.
pub fn context_type(key: &str) -> &'static str {
    let key_lower = key.to_lowercase();
    CONTEXT_LABELS
        .iter()
        .find(|(needle, _)| key_lower.contains(*needle))
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_CONTEXT_LABEL)
}
