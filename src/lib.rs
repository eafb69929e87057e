pub mod catalog;
pub mod config;
pub mod equalizer;
pub mod text_optimization;

// Re-export main types for convenient access
pub use text_optimization::{
    smart_truncate, TruncateOptions,
    keyword_density, optimize_faq_answer, optimize_faq_question, optimize_review_text,
    normalize_whitespace
};

// Re-export equalizer entry points
pub use equalizer::{
    equalize_description, equalize_with_band, equalize_course_descriptions,
    EqualizerOptions, Equalized, EqualizedCourse, LengthBand
};

// Re-export catalog and configuration types used by the CLI and integration tests
pub use catalog::{Course, CourseCatalog, CourseType};
pub use config::AppConfig;
