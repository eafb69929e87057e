// WHY: Keyword placement helpers for reviews and FAQ entries
// Each helper picks keyword sets for its content kind and delegates the cut to smart_truncate

use tracing::debug;

use super::truncate::{smart_truncate, TruncateOptions};

pub const REVIEW_MAX_LENGTH: usize = 280;
pub const FAQ_QUESTION_MAX_LENGTH: usize = 120;
pub const FAQ_QUESTION_MIN_WORDS: usize = 8;
pub const FAQ_ANSWER_MAX_LENGTH: usize = 350;
pub const FAQ_ANSWER_MIN_WORDS: usize = 15;

/// Location phrases that mark a review as already carrying local SEO keywords
pub const LOCATION_KEYWORDS: &[&str] = &[
    "Faisalabad",
    "computer training institute Faisalabad",
    "IT training Faisalabad",
    "software training Faisalabad",
];

/// Keywords every FAQ answer should keep
pub const FAQ_CORE_KEYWORDS: &[&str] = &[
    "Faisalabad",
    "IT training",
    "computer courses",
    "professional training",
    "job placement",
];

type FaqCategoryRow = (&'static str, &'static [&'static str], &'static [&'static str]);

/// FAQ category -> (question keywords, answer keywords)
const FAQ_CATEGORY_KEYWORDS: &[FaqCategoryRow] = &[
    (
        "programming",
        &["Python training Faisalabad", "coding institute"],
        &["Python programming", "coding skills"],
    ),
    (
        "web development",
        &["web development course", "HTML CSS training"],
        &["web development", "frontend backend"],
    ),
    (
        "digital marketing",
        &["digital marketing course", "SEO training Faisalabad"],
        &["digital marketing", "SEO optimization"],
    ),
    (
        "courses",
        &["best IT courses Faisalabad", "computer training"],
        &["course selection", "learning path"],
    ),
    (
        "certification",
        &["IT certification", "diploma courses"],
        &["certification", "industry recognition"],
    ),
    (
        "support",
        &["student support", "learning assistance"],
        &["student support", "24/7 assistance"],
    ),
];

const FAQ_QUESTION_FALLBACK: &[&str] = &["IT training", "Faisalabad"];

/// Course keywords for a review, chosen by the first matching topic
fn review_course_keywords(course: &str) -> &'static [&'static str] {
    let course = course.to_lowercase();

    if course.contains("python") {
        &["Python programming", "learn coding Faisalabad"]
    } else if course.contains("web") {
        &["web development", "full stack training"]
    } else if course.contains("digital") {
        &["digital marketing", "SEO training"]
    } else if course.contains("cyber") {
        &["cyber security", "ethical hacking"]
    } else {
        &["IT skills training", "professional courses"]
    }
}

/// Lowercase and collapse whitespace so "Web  Development" finds its table row
fn faq_category_row(category: &str) -> Option<&'static FaqCategoryRow> {
    let key = category
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    FAQ_CATEGORY_KEYWORDS.iter().find(|(name, _, _)| *name == key)
}

/// Shorten a review that already mentions the location, keeping location and course keywords
/// WHY: reviews without a location keyword are left as written
pub fn optimize_review_text(text: &str, course: &str) -> String {
    let text_lower = text.to_lowercase();
    let has_location_keyword = LOCATION_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(&keyword.to_lowercase()));

    if !has_location_keyword {
        debug!(course, "Review has no location keyword, leaving unchanged");
        return text.to_string();
    }

    let preserve = LOCATION_KEYWORDS
        .iter()
        .chain(review_course_keywords(course))
        .copied();

    let options = TruncateOptions::new(REVIEW_MAX_LENGTH)
        .preserve(preserve)
        .priority(["Faisalabad", course]);

    smart_truncate(text, &options)
}

/// Shorten an FAQ question around its category's search keywords
pub fn optimize_faq_question(question: &str, category: &str) -> String {
    let keywords = faq_category_row(category)
        .map(|(_, question_keywords, _)| *question_keywords)
        .unwrap_or(FAQ_QUESTION_FALLBACK);

    let options = TruncateOptions::new(FAQ_QUESTION_MAX_LENGTH)
        .preserve(keywords.iter().copied())
        .priority(["Faisalabad"])
        .min_words(FAQ_QUESTION_MIN_WORDS);

    smart_truncate(question, &options)
}

/// Shorten an FAQ answer, keeping the core keywords plus its category's keywords
pub fn optimize_faq_answer(answer: &str, category: &str) -> String {
    let category_keywords = faq_category_row(category)
        .map(|(_, _, answer_keywords)| *answer_keywords)
        .unwrap_or(&[]);

    let options = TruncateOptions::new(FAQ_ANSWER_MAX_LENGTH)
        .preserve(FAQ_CORE_KEYWORDS.iter().chain(category_keywords).copied())
        .priority(["Faisalabad", "IT training"])
        .min_words(FAQ_ANSWER_MIN_WORDS);

    smart_truncate(answer, &options)
}

/// Percentage of word positions at which `keyword` starts, compared case-insensitively
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();
    let words: Vec<&str> = text_lower.split_whitespace().collect();
    let keyword_words: Vec<&str> = keyword_lower.split_whitespace().collect();

    if words.is_empty() || keyword_words.is_empty() || keyword_words.len() > words.len() {
        return 0.0;
    }

    let count = words
        .windows(keyword_words.len())
        .filter(|window| *window == keyword_words.as_slice())
        .count();

    count as f64 / words.len() as f64 * 100.0
}
