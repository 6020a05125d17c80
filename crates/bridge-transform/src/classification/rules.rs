//! Ordered, first-match-wins keyword rules.

use crate::normalization::normalize_text;

/// Keywords that, when any is contained in a text, yield `outcome`.
#[derive(Debug, Clone)]
pub struct KeywordRule<T> {
    pub outcome: T,
    keywords: Vec<String>,
}

impl<T: Copy> KeywordRule<T> {
    /// Keywords are normalized once here; empty ones are dropped.
    pub fn new(outcome: T, keywords: &[&str]) -> Self {
        Self {
            outcome,
            keywords: keywords
                .iter()
                .map(|keyword| normalize_text(keyword))
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `normalized` must already be in [`normalize_text`] form.
    fn matches_normalized(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}

/// Rules evaluated in declaration order; the first match wins.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: Vec<KeywordRule<T>>,
}

impl<T: Copy> RuleSet<T> {
    pub fn new(rules: Vec<KeywordRule<T>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KeywordRule<T>] {
        &self.rules
    }

    /// Outcome of the first rule matching `text`.
    pub fn first_match(&self, text: &str) -> Option<T> {
        let normalized = normalize_text(text);
        if normalized.is_empty() {
            return None;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches_normalized(&normalized))
            .map(|rule| rule.outcome)
    }

    /// Tries candidate fields in priority order.
    ///
    /// Empty candidates are skipped; the first candidate that produces any
    /// match decides the outcome.
    pub fn classify<'a, I>(&self, candidates: I) -> Option<T>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .filter(|candidate| !candidate.trim().is_empty())
            .find_map(|candidate| self.first_match(candidate))
    }

    /// Whether any rule matches `text`.
    pub fn any_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}
