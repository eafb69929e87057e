// WHY: Text optimization entry point: keyword-aware truncation plus the SEO helpers built on it
// Everything here is a pure function over strings, safe to call from any thread

pub mod keyword_matcher;
pub mod normalization;
pub mod seo;
pub mod truncate;

// Re-export core types
pub use keyword_matcher::{KeywordMatcher, KeywordSpan};
pub use normalization::{normalize_whitespace, normalize_whitespace_into};
pub use seo::{keyword_density, optimize_faq_answer, optimize_faq_question, optimize_review_text};
pub use truncate::{
    char_len, smart_truncate, CutMode, TruncateOptions, WordLayout, DEFAULT_MIN_WORDS, ELLIPSIS,
    KEYWORD_LOOKAHEAD_WORDS, PRIORITY_GRACE_CHARS,
};
