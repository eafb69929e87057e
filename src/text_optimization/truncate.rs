// WHY: Keyword-aware truncation that keeps card text inside a length budget without
// cutting recognized keyword phrases in half

use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use super::keyword_matcher::{word_starts, KeywordMatcher, KeywordSpan};

/// Extra characters a boundary word may overflow the budget by when it holds a priority keyword
pub const PRIORITY_GRACE_CHARS: usize = 20;
/// Words past the cut that are searched for the start of a preserved keyword
pub const KEYWORD_LOOKAHEAD_WORDS: usize = 5;
/// Texts with this many words or fewer are never truncated
pub const DEFAULT_MIN_WORDS: usize = 10;
/// Suffix appended when words were dropped
pub const ELLIPSIS: &str = "...";

/// Length of a string in characters, the unit every budget in this crate uses
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Options for a single truncation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOptions {
    /// Character budget for the kept words
    pub max_length: usize,
    /// Phrases that must never be split by the cut
    pub preserve_keywords: Vec<String>,
    /// Phrases whose boundary word may use the grace window
    pub priority_keywords: Vec<String>,
    /// Word count at or below which the text is returned unchanged
    pub min_words: usize,
}

impl TruncateOptions {
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            preserve_keywords: Vec::new(),
            priority_keywords: Vec::new(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }

    pub fn preserve<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preserve_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn priority<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }
}

/// How a cut treats keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutMode {
    /// Priority grace, phrase completion and lookahead all apply
    KeywordAware,
    /// Plain word-boundary cut, keywords ignored
    Plain,
}

/// Text split into words with keyword spans located once
/// WHY: scanning is the expensive part; callers searching for a budget re-cut the same layout many times
pub struct WordLayout<'t> {
    text: &'t str,
    words: Vec<&'t str>,
    /// Preserved keyword spans keyed by start word; a later keyword overwrites an earlier one
    keyword_spans: BTreeMap<usize, KeywordSpan>,
    priority_positions: HashSet<usize>,
}

impl<'t> WordLayout<'t> {
    pub fn new(text: &'t str, preserve: &KeywordMatcher, priority: &KeywordMatcher) -> Self {
        let starts = word_starts(text);
        let words: Vec<&str> = text.split_whitespace().collect();

        let keyword_spans = preserve
            .find_spans(text, &starts)
            .into_iter()
            .map(|span| (span.start_word, span))
            .collect();

        let priority_positions = priority
            .find_spans(text, &starts)
            .into_iter()
            .map(|span| span.start_word)
            .collect();

        Self {
            text,
            words,
            keyword_spans,
            priority_positions,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_priority_position(&self, word_index: usize) -> bool {
        self.priority_positions.contains(&word_index)
    }

    /// Truncate to `max_length`, honoring the pass-through and short-text guards
    pub fn truncate_to(&self, max_length: usize, min_words: usize, mode: CutMode) -> String {
        if char_len(self.text) <= max_length {
            return self.text.to_string();
        }

        if self.words.len() <= min_words {
            debug!(words = self.words.len(), min_words, "Text too short to truncate");
            return self.text.to_string();
        }

        let truncate_at = self.cut_point(max_length, mode);
        self.render(truncate_at)
    }

    /// Number of words kept for the given budget
    pub fn cut_point(&self, max_length: usize, mode: CutMode) -> usize {
        let mut truncate_at = self.words.len();
        let mut current_length = 0;

        for (i, word) in self.words.iter().enumerate() {
            let word_length = char_len(word) + usize::from(i > 0);

            if current_length + word_length > max_length {
                let within_grace =
                    current_length + word_length <= max_length + PRIORITY_GRACE_CHARS;
                let keep_boundary_word = mode == CutMode::KeywordAware
                    && within_grace
                    && self.is_priority_position(i);
                truncate_at = if keep_boundary_word { i + 1 } else { i };
                break;
            }

            current_length += word_length;
        }

        if mode == CutMode::Plain {
            return truncate_at;
        }

        let mut truncate_at = self.complete_phrases(truncate_at);

        // WHY: window end follows the current cut, so each kept keyword opens a new window
        let mut i = truncate_at;
        while i < (truncate_at + KEYWORD_LOOKAHEAD_WORDS).min(self.words.len()) {
            if let Some(span) = self.keyword_spans.get(&i) {
                truncate_at = truncate_at.max(span.end_word + 1);
            }
            i += 1;
        }

        let truncate_at = self.complete_phrases(truncate_at);
        debug!(max_length, truncate_at, words = self.words.len(), "Computed cut point");
        truncate_at
    }

    /// Extend the cut past any preserved phrase it would split
    fn complete_phrases(&self, mut truncate_at: usize) -> usize {
        loop {
            let straddling = self
                .keyword_spans
                .range(..truncate_at)
                .filter(|(_, span)| span.end_word >= truncate_at)
                .map(|(_, span)| span.end_word + 1)
                .max();

            match straddling {
                Some(end) => truncate_at = end,
                None => return truncate_at.min(self.words.len()),
            }
        }
    }

    fn render(&self, truncate_at: usize) -> String {
        let kept = self.words[..truncate_at].join(" ");
        if truncate_at < self.words.len() {
            kept + ELLIPSIS
        } else {
            kept
        }
    }
}

/// Truncate text to a length budget while keeping keyword phrases whole
pub fn smart_truncate(text: &str, options: &TruncateOptions) -> String {
    if char_len(text) <= options.max_length {
        return text.to_string();
    }

    let preserve = KeywordMatcher::new(&options.preserve_keywords);
    let priority = KeywordMatcher::new(&options.priority_keywords);
    let layout = WordLayout::new(text, &preserve, &priority);

    layout.truncate_to(options.max_length, options.min_words, CutMode::KeywordAware)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY_TEXT: &str = "Tech Hub Faisalabad offers the best IT training course in the city for students";

    #[test]
    fn test_pass_through_when_within_budget() {
        let options = TruncateOptions::new(200).preserve(["IT training"]);
        assert_eq!(smart_truncate(CITY_TEXT, &options), CITY_TEXT);

        let exact = TruncateOptions::new(char_len(CITY_TEXT)).min_words(0);
        assert_eq!(smart_truncate(CITY_TEXT, &exact), CITY_TEXT);
    }

    #[test]
    fn test_short_text_guard_wins_over_budget() {
        let text = "Supercalifragilistic certification programme";
        let options = TruncateOptions::new(5);
        assert_eq!(smart_truncate(text, &options), text);
    }

    #[test]
    fn test_plain_cut_appends_ellipsis() {
        let options = TruncateOptions::new(25).min_words(3);
        assert_eq!(smart_truncate(CITY_TEXT, &options), "Tech Hub Faisalabad...");
    }

    #[test]
    fn test_phrase_straddling_cut_survives() {
        let options = TruncateOptions::new(40)
            .preserve(["IT training"])
            .priority(["Faisalabad"])
            .min_words(3);
        let result = smart_truncate(CITY_TEXT, &options);

        assert_eq!(result, "Tech Hub Faisalabad offers the best IT training...");
        assert!(char_len(&result) <= 60);
    }

    #[test]
    fn test_priority_keyword_uses_grace_window() {
        // budget ends right before "Faisalabad"
        let options = TruncateOptions::new(10).priority(["faisalabad"]).min_words(3);
        assert_eq!(smart_truncate(CITY_TEXT, &options), "Tech Hub Faisalabad...");

        let without_priority = TruncateOptions::new(10).min_words(3);
        assert_eq!(smart_truncate(CITY_TEXT, &without_priority), "Tech Hub...");
    }

    #[test]
    fn test_grace_window_is_bounded() {
        let text = "Join us at Tech Hub for Internationalization-and-localization-workshops every week of the year";
        let options = TruncateOptions::new(23)
            .priority(["Internationalization-and-localization-workshops"])
            .min_words(3);
        assert_eq!(smart_truncate(text, &options), "Join us at Tech Hub for...");
    }

    #[test]
    fn test_lookahead_includes_nearby_keyword() {
        let text = "Learn modern tools with us and earn a certification at the end of every single module";
        let options = TruncateOptions::new(30).preserve(["certification"]).min_words(3);
        // naive cut keeps six words, "certification" is the ninth
        assert_eq!(
            smart_truncate(text, &options),
            "Learn modern tools with us and earn a certification..."
        );
    }

    #[test]
    fn test_lookahead_window_is_limited() {
        let text = "one two three four five six seven eight nine ten certification eleven twelve";
        let options = TruncateOptions::new(9).preserve(["certification"]).min_words(3);
        assert_eq!(smart_truncate(text, &options), "one two...");
    }

    #[test]
    fn test_lookahead_window_moves_with_each_keyword() {
        let text = "aaaa bbbb cccc w4 w5 w6 alpha w8 w9 w10 beta w12 w13 w14 w15 w16";
        let options = TruncateOptions::new(14).preserve(["alpha", "beta"]).min_words(3);

        // "beta" lies outside the first window but inside the one opened by "alpha"
        assert_eq!(
            smart_truncate(text, &options),
            "aaaa bbbb cccc w4 w5 w6 alpha w8 w9 w10 beta..."
        );

        let alpha_only = TruncateOptions::new(14).preserve(["alpha"]).min_words(3);
        assert_eq!(smart_truncate(text, &alpha_only), "aaaa bbbb cccc w4 w5 w6 alpha...");
    }

    #[test]
    fn test_zero_budget_yields_ellipsis() {
        let options = TruncateOptions::new(0).min_words(3);
        assert_eq!(smart_truncate(CITY_TEXT, &options), "...");
        assert_eq!(smart_truncate("", &options), "");
    }

    #[test]
    fn test_whitespace_collapses_when_all_words_fit() {
        let text = "one   two   three   four";
        let options = TruncateOptions::new(20).min_words(2);
        assert_eq!(smart_truncate(text, &options), "one two three four");
    }

    #[test]
    fn test_plain_mode_ignores_keywords() {
        let preserve = KeywordMatcher::new(&["IT training"]);
        let priority = KeywordMatcher::new(&["Faisalabad"]);
        let layout = WordLayout::new(CITY_TEXT, &preserve, &priority);

        assert_eq!(layout.word_count(), 14);
        assert_eq!(layout.cut_point(40, CutMode::Plain), 7);
        assert_eq!(layout.cut_point(40, CutMode::KeywordAware), 8);
        assert_eq!(layout.cut_point(10, CutMode::Plain), 2);
        // grace keeps "Faisalabad", lookahead then reaches "IT training"
        assert_eq!(layout.cut_point(10, CutMode::KeywordAware), 8);
    }

    #[test]
    fn test_deterministic_output() {
        let options = TruncateOptions::new(33)
            .preserve(["IT training", "course"])
            .priority(["Faisalabad"])
            .min_words(3);
        let first = smart_truncate(CITY_TEXT, &options);
        let second = smart_truncate(CITY_TEXT, &options);
        assert_eq!(first, second);
    }
}
