// Transcript cleaner - strips CHAT annotation markup and stopwords from raw
// transcript text
//
// Cleaning is an ordered list of independent pattern-removal rules applied to
// every physical line. Bracket matching is non-greedy and not nesting-aware;
// mismatched or overlapping delimiters give best-effort results.

use regex::Regex;

use crate::stopwords::StopwordSet;

/// Ordered removal rules: (name, pattern)
const RULES: &[(&str, &str)] = &[
    // line-initial @ metadata header, whole line
    ("metadata-header", r"^@.*"),
    // ((...)) annotation spans
    ("double-paren-span", r"\(\(.*?\)\)"),
    // <...> markup spans
    ("angle-span", r"<.*?>"),
    // [...] annotation spans
    ("square-span", r"\[.*?\]"),
    // line-initial % dependent tier, whole line
    ("dependent-tier", r"^%.*"),
    // *SPEAKER: prefix up to and including the colon
    ("speaker-tag", r"^\*.*?:"),
];

/// Compiled removal rule for a single annotation pattern
struct StripRule {
    name: &'static str,
    regex: Regex,
}

/// Cleaner that removes annotation markup and stopwords from transcript text
pub struct TranscriptCleaner {
    rules: Vec<StripRule>,
    stopwords: StopwordSet,
}

impl TranscriptCleaner {
    /// Create a cleaner with the given stopword set.
    /// Pre-compiles the removal patterns for reuse across files.
    pub fn new(stopwords: StopwordSet) -> Self {
        let rules = RULES
            .iter()
            .filter_map(|&(name, pattern)| match Regex::new(pattern) {
                Ok(regex) => Some(StripRule { name, regex }),
                Err(e) => {
                    crate::warn!("Failed to compile strip rule '{}': {}", name, e);
                    None
                }
            })
            .collect();

        Self { rules, stopwords }
    }

    /// Clean a whole transcript.
    ///
    /// Each line has all removal rules applied, is trimmed, and has stopwords
    /// filtered out. Lines that end up empty are dropped entirely; surviving
    /// lines are rejoined with newlines.
    pub fn clean(&self, text: &str) -> String {
        let cleaned: Vec<String> = text
            .lines()
            .filter_map(|line| {
                let stripped = self.strip_line(line);
                let filtered = self.filter_stopwords(&stripped);
                if filtered.is_empty() {
                    None
                } else {
                    Some(filtered)
                }
            })
            .collect();

        cleaned.join("\n")
    }

    /// Apply every removal rule to one physical line and trim the remainder.
    /// Rules are independent; all matches within the line are removed.
    fn strip_line(&self, line: &str) -> String {
        let mut stripped = line.to_string();
        for rule in &self.rules {
            if rule.regex.is_match(&stripped) {
                crate::trace!("Rule '{}' matched line: {:?}", rule.name, line);
                stripped = rule.regex.replace_all(&stripped, "").into_owned();
            }
        }
        stripped.trim().to_string()
    }

    /// Drop whitespace-separated tokens whose lowercase form is a stopword
    /// and rejoin the rest with single spaces
    fn filter_stopwords(&self, line: &str) -> String {
        line.split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "cleaner_test.rs"]
mod tests;
