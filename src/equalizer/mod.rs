// WHY: Description equalizer keeps every course card's text inside one length band
// Long descriptions are cut with keyword-aware truncation, short ones are extended with filler sentences

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Course, CourseType};
use crate::text_optimization::{
    char_len, CutMode, KeywordMatcher, WordLayout, DEFAULT_MIN_WORDS, ELLIPSIS,
};

pub mod enhancers;
pub mod keywords;

pub use enhancers::{extend_description, extend_description_lightly, EnhancerSet};
pub use keywords::{
    course_specific_keywords, default_priority_keywords, preserve_keywords, STANDARD_KEYWORDS,
};

pub const DEFAULT_TARGET_LENGTH: usize = 250;
pub const DEFAULT_MIN_LENGTH: usize = 120;
/// Descriptions up to this far above target are left alone
pub const PASS_THROUGH_TOLERANCE: usize = 30;
/// Descriptions this far or more below target (but above the minimum) get light extension
pub const LIGHT_EXTEND_GAP: usize = 50;
/// Allowed distance outside [min, target] for truncated output
pub const BAND_SLACK: usize = 5;
/// Long descriptions with this many words or fewer are not truncated
pub const TRUNCATE_MIN_WORDS: usize = 20;

/// Length targets and keyword overrides for equalization
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EqualizerOptions {
    /// Character length descriptions are steered toward
    pub target_length: usize,
    /// Descriptions shorter than this are fully extended
    pub min_length: usize,
    /// Replaces the standard keyword list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_keywords: Option<Vec<String>>,
    /// Replaces the default priority list when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_keywords: Option<Vec<String>>,
}

impl Default for EqualizerOptions {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LENGTH,
            min_length: DEFAULT_MIN_LENGTH,
            preserve_keywords: None,
            priority_keywords: None,
        }
    }
}

impl EqualizerOptions {
    pub fn new(target_length: usize, min_length: usize) -> Self {
        Self {
            target_length,
            min_length,
            ..Self::default()
        }
    }
}

/// Partition of the description length axis
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LengthBand {
    /// Longer than target + tolerance
    Truncate,
    /// Shorter than the minimum length
    Extend,
    /// At least the minimum but well short of target
    LightExtend,
    /// Close enough to target to render as written
    PassThrough,
}

impl LengthBand {
    /// Classify a description length; bands are checked top-down and do not overlap
    pub fn classify(length: usize, options: &EqualizerOptions) -> Self {
        let target = options.target_length;

        if length > target + PASS_THROUGH_TOLERANCE {
            LengthBand::Truncate
        } else if length < options.min_length {
            LengthBand::Extend
        } else if length < target.saturating_sub(LIGHT_EXTEND_GAP) {
            LengthBand::LightExtend
        } else {
            LengthBand::PassThrough
        }
    }
}

/// Equalized text plus the band that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equalized {
    pub text: String,
    pub band: LengthBand,
}

/// One row of a batch equalization report
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EqualizedCourse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub band: LengthBand,
    pub original_length: usize,
    pub equalized_length: usize,
    pub original_description: String,
    pub equalized_description: String,
}

/// Keyword matchers for one course, compiled once per equalization
struct CourseKeywords {
    preserve: KeywordMatcher,
    priority: KeywordMatcher,
}

impl CourseKeywords {
    fn new(
        course_name: &str,
        category: &str,
        course_type: CourseType,
        options: &EqualizerOptions,
    ) -> Self {
        let base = options
            .preserve_keywords
            .clone()
            .unwrap_or_else(keywords::standard_keywords);
        let preserve = preserve_keywords(&base, course_name, category, course_type);
        let priority = options
            .priority_keywords
            .clone()
            .unwrap_or_else(|| default_priority_keywords(course_name));

        Self {
            preserve: KeywordMatcher::new(&preserve),
            priority: KeywordMatcher::new(&priority),
        }
    }

    fn layout<'t>(&self, text: &'t str) -> WordLayout<'t> {
        WordLayout::new(text, &self.preserve, &self.priority)
    }
}

/// Cut a long description so it lands inside the band
/// WHY: keyword extension can overshoot the budget by whole words, so the budget is lowered one
/// character at a time until the keyword-aware cut fits; a plain cut is the fallback
fn fit_to_band(description: &str, keywords: &CourseKeywords, options: &EqualizerOptions) -> String {
    let layout = keywords.layout(description);
    if layout.word_count() <= TRUNCATE_MIN_WORDS {
        debug!(words = layout.word_count(), "Long description has too few words to truncate");
        return description.to_string();
    }

    let ceiling = options.target_length + BAND_SLACK;
    let floor = options.min_length.saturating_sub(BAND_SLACK);
    let start_budget = options.target_length.saturating_sub(ELLIPSIS.len());

    let fitted = (0..=start_budget).rev().find_map(|budget| {
        let candidate = layout.truncate_to(budget, TRUNCATE_MIN_WORDS, CutMode::KeywordAware);
        (char_len(&candidate) <= ceiling).then_some((budget, candidate))
    });

    match fitted {
        Some((budget, candidate)) if char_len(&candidate) >= floor => {
            debug!(budget, length = char_len(&candidate), "Keyword-aware cut fits band");
            candidate
        }
        _ => {
            debug!("Keyword-aware cut cannot fit band, using plain cut");
            layout.truncate_to(start_budget, TRUNCATE_MIN_WORDS, CutMode::Plain)
        }
    }
}

/// Final clamp after extension
fn clamp_to_target(text: &str, keywords: &CourseKeywords, target_length: usize) -> String {
    keywords
        .layout(text)
        .truncate_to(target_length, DEFAULT_MIN_WORDS, CutMode::KeywordAware)
}

/// Equalize a description and report which band handled it
pub fn equalize_with_band(
    description: &str,
    course_name: &str,
    category: &str,
    course_type: CourseType,
    options: &EqualizerOptions,
) -> Equalized {
    let length = char_len(description);
    let band = LengthBand::classify(length, options);
    debug!(course_name, length, ?band, "Equalizing description");

    let text = match band {
        LengthBand::PassThrough => description.to_string(),
        LengthBand::Truncate => {
            let keywords = CourseKeywords::new(course_name, category, course_type, options);
            fit_to_band(description, &keywords, options)
        }
        LengthBand::Extend => {
            let keywords = CourseKeywords::new(course_name, category, course_type, options);
            let enhancers = EnhancerSet::for_course(course_name, course_type);
            let extended = extend_description(description, &enhancers, options.target_length);
            clamp_to_target(&extended, &keywords, options.target_length)
        }
        LengthBand::LightExtend => {
            let keywords = CourseKeywords::new(course_name, category, course_type, options);
            let enhancers = EnhancerSet::for_course(course_name, course_type);
            let extended =
                extend_description_lightly(description, &enhancers, options.target_length);
            clamp_to_target(&extended, &keywords, options.target_length)
        }
    };

    Equalized { text, band }
}

/// Equalize a course description toward the target length band
pub fn equalize_description(
    description: &str,
    course_name: &str,
    category: &str,
    course_type: CourseType,
    options: &EqualizerOptions,
) -> String {
    equalize_with_band(description, course_name, category, course_type, options).text
}

/// Equalize every course in catalog order
pub fn equalize_course_descriptions(
    courses: &[Course],
    options: &EqualizerOptions,
) -> Vec<EqualizedCourse> {
    courses
        .iter()
        .map(|course| {
            let equalized = equalize_with_band(
                &course.description,
                &course.name,
                &course.category,
                course.course_type,
                options,
            );

            EqualizedCourse {
                id: course.id.clone(),
                name: course.name.clone(),
                course_type: course.course_type,
                band: equalized.band,
                original_length: char_len(&course.description),
                equalized_length: char_len(&equalized.text),
                original_description: course.description.clone(),
                equalized_description: equalized.text,
            }
        })
        .collect()
}
