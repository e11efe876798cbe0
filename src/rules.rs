use std::borrow::Cow;

use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::vocabulary::Entry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Whole word: no word character directly before or after the match.
    Word,
    /// Word boundary before; optional whitespace then `(` after. The `(` is part of the match.
    CallPrefix,
    /// Plain substring, no boundary checks.
    Literal,
}

#[derive(Clone, Debug)]
pub struct PatternRule {
    alternates: &'static [&'static str],
    replacement: &'static str,
    kind: RuleKind,
    re: Regex,
}

impl PatternRule {
    pub fn new(entry: &Entry) -> anyhow::Result<Self> {
        let re = Regex::new(&pattern_for(entry.alternates, entry.kind))?;
        Ok(Self {
            alternates: entry.alternates,
            replacement: entry.replacement,
            kind: entry.kind,
            re,
        })
    }

    #[must_use]
    pub fn alternates(&self) -> &'static [&'static str] {
        self.alternates
    }

    #[must_use]
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    #[must_use]
    pub fn as_regex(&self) -> &Regex {
        &self.re
    }

    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.re.is_match(text)
    }

    /// Replaces every match in `text`. Borrows when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.re.replace_all(text, NoExpand(self.replacement))
    }
}

fn pattern_for(alternates: &[&str], kind: RuleKind) -> String {
    let alts = alternates
        .iter()
        .map(|a| regex::escape(a))
        .collect::<Vec<_>>()
        .join("|");
    match kind {
        RuleKind::Word => format!(r"\b(?:{alts})\b"),
        RuleKind::CallPrefix => format!(r"\b(?:{alts})\s*\("),
        RuleKind::Literal => format!("(?:{alts})"),
    }
}

/// Ordered rule list for one mode. Rules run in declaration order, each on the previous output.
#[derive(Clone, Debug, Default)]
pub struct VocabularyTable {
    rules: Vec<PatternRule>,
}

impl VocabularyTable {
    pub fn compile(entries: &[Entry]) -> anyhow::Result<Self> {
        let rules = entries
            .iter()
            .map(PatternRule::new)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    #[must_use]
    pub fn from_rules(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            let next = match rule.apply(&out) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(s) => s,
            };
            out = next;
        }
        out
    }
}
