// WHY: Centralized keyword matching so truncation and SEO helpers agree on what a "match" is
// Case-insensitive, word-boundary anchored, special characters escaped before compiling

use regex_automata::{meta::Regex, util::syntax};
use tracing::{trace, warn};

/// A keyword occurrence expressed in word indices of the whitespace-split text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSpan {
    pub keyword: String,
    /// Index of the word containing the first matched character
    pub start_word: usize,
    /// Index of the word containing the last matched character
    pub end_word: usize,
}

/// Byte offsets where each whitespace-separated word begins
/// WHY: lets every match be mapped to a word index with a binary search instead of re-splitting prefixes
pub fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;

    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(offset);
            in_word = true;
        }
    }

    starts
}

/// Index of the word containing the byte at `offset`
fn word_index_at(starts: &[usize], offset: usize) -> usize {
    starts.partition_point(|&start| start <= offset).saturating_sub(1)
}

/// Compiled keyword list
pub struct KeywordMatcher {
    patterns: Vec<(String, Regex)>,
}

impl KeywordMatcher {
    /// Compile keywords into `\b<escaped>\b` patterns
    /// WHY: blank keywords would match at every boundary, so they are dropped here
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut patterns = Vec::with_capacity(keywords.len());

        for keyword in keywords {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                continue;
            }

            let pattern = format!(r"\b{}\b", regex_syntax::escape(keyword));
            let compiled = Regex::builder()
                .syntax(syntax::Config::new().case_insensitive(true))
                .build(&pattern);

            match compiled {
                Ok(regex) => patterns.push((keyword.to_string(), regex)),
                Err(e) => warn!(keyword, error = %e, "Skipping keyword that failed to compile"),
            }
        }

        Self { patterns }
    }

    /// Find every occurrence of every keyword, in keyword order then text order
    pub fn find_spans(&self, text: &str, starts: &[usize]) -> Vec<KeywordSpan> {
        let mut spans = Vec::new();
        if starts.is_empty() {
            return spans;
        }

        for (keyword, regex) in &self.patterns {
            for found in regex.find_iter(text) {
                let span = KeywordSpan {
                    keyword: keyword.clone(),
                    start_word: word_index_at(starts, found.start()),
                    end_word: word_index_at(starts, found.end().saturating_sub(1)),
                };
                trace!(
                    keyword = %span.keyword,
                    start = span.start_word,
                    end = span.end_word,
                    "Keyword span"
                );
                spans.push(span);
            }
        }

        spans
    }
}
