// Properties of keyword-aware truncation across every budget
// WHY: Card layouts pick arbitrary budgets, so guarantees are checked for all of them

use cardtext::text_optimization::{char_len, ELLIPSIS};
use cardtext::{smart_truncate, TruncateOptions};

const ENROLL_TEXT: &str = "Enroll now in our IT training program at Tech Hub Faisalabad with practical projects, \
    mentor reviews and industry certification for every graduate";

/// Word index ranges of the preserved phrases in ENROLL_TEXT
const PHRASE_SPANS: &[(usize, usize)] = &[(4, 5), (8, 10)];

fn kept_words(result: &str) -> Vec<&str> {
    result
        .strip_suffix(ELLIPSIS)
        .unwrap_or(result)
        .split_whitespace()
        .collect()
}

fn enroll_options(max_length: usize) -> TruncateOptions {
    TruncateOptions::new(max_length)
        .preserve(["IT training", "Tech Hub Faisalabad", "certification"])
        .priority(["Faisalabad"])
}

#[test]
fn test_output_is_a_word_prefix_for_every_budget() {
    let words: Vec<&str> = ENROLL_TEXT.split_whitespace().collect();

    for max_length in 0..=char_len(ENROLL_TEXT) + 1 {
        let result = smart_truncate(ENROLL_TEXT, &enroll_options(max_length));
        let kept = kept_words(&result);

        assert_eq!(
            kept.as_slice(),
            &words[..kept.len()],
            "budget {} produced {:?}",
            max_length,
            result
        );
        assert_eq!(result.ends_with(ELLIPSIS), kept.len() < words.len());
    }
}

#[test]
fn test_preserved_phrases_are_never_split() {
    for max_length in 0..=char_len(ENROLL_TEXT) {
        let result = smart_truncate(ENROLL_TEXT, &enroll_options(max_length));
        let kept = kept_words(&result).len();

        for &(start, end) in PHRASE_SPANS {
            assert!(
                !(start < kept && kept <= end),
                "budget {} split a phrase: {:?}",
                max_length,
                result
            );
        }
    }
}

#[test]
fn test_plain_text_respects_budget_plus_ellipsis() {
    for max_length in 0..=char_len(ENROLL_TEXT) {
        let result = smart_truncate(ENROLL_TEXT, &TruncateOptions::new(max_length));
        assert!(
            char_len(&result) <= max_length + ELLIPSIS.len(),
            "budget {} produced {} characters",
            max_length,
            char_len(&result)
        );
    }
}

#[test]
fn test_text_within_budget_is_returned_verbatim() {
    let text = "  Spacing   is kept when nothing is cut  ";
    assert_eq!(smart_truncate(text, &TruncateOptions::new(char_len(text))), text);
}

#[test]
fn test_short_texts_are_never_cut() {
    let text = "Ten words exactly in this sentence about professional IT training";
    assert_eq!(text.split_whitespace().count(), 10);

    for max_length in 0..char_len(text) {
        assert_eq!(smart_truncate(text, &TruncateOptions::new(max_length)), text);
    }
}

#[test]
fn test_phrase_straddling_the_budget_is_completed() {
    let text = "Tech Hub Faisalabad offers the best IT training course in the city for students";
    let options = TruncateOptions::new(40).preserve(["IT training"]).priority(["Faisalabad"]);

    assert_eq!(
        smart_truncate(text, &options),
        "Tech Hub Faisalabad offers the best IT training..."
    );
}

#[test]
fn test_irregular_whitespace_is_collapsed_when_cut() {
    let text = "  Tech   Hub Faisalabad offers  the best IT training course in the city for students ";
    let options = TruncateOptions::new(40).preserve(["IT training"]);

    assert_eq!(
        smart_truncate(text, &options),
        "Tech Hub Faisalabad offers the best IT training..."
    );
}
