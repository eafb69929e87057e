// WHY: Static keyword tables that decide which phrases survive equalization
// Topic rows are matched as lowercase substrings of the course name or category

use crate::catalog::CourseType;

/// Keywords preserved in every course description
pub const STANDARD_KEYWORDS: &[&str] = &[
    "Faisalabad",
    "IT training",
    "computer training",
    "professional",
    "course",
    "institute",
    "practical",
    "skills",
    "certification",
    "hands-on",
];

/// Course-name substring -> keywords, in table order
pub const COURSE_TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    // Programming
    ("python", &["Python programming", "coding", "development", "programming"]),
    ("javascript", &["JavaScript", "web development", "full stack", "programming"]),
    ("full stack", &["web development", "frontend", "backend", "development"]),
    // Security
    ("security", &["cyber security", "ethical hacking", "security", "cybersecurity"]),
    ("cybersecurity", &["cyber security", "ethical hacking", "security", "penetration testing"]),
    ("forensics", &["digital forensics", "investigation", "cybersecurity", "forensic"]),
    // Cloud
    ("cloud", &["cloud computing", "AWS", "Azure", "cloud platform"]),
    ("aws", &["AWS", "cloud computing", "Amazon Web Services"]),
    ("azure", &["Azure", "Microsoft Azure", "cloud computing"]),
    // Design
    ("design", &["graphic design", "creative", "visual design", "Adobe"]),
    ("ui/ux", &["UI design", "UX design", "user interface", "user experience"]),
    ("graphic", &["graphic design", "Adobe", "creative", "visual"]),
    // Marketing
    ("marketing", &["digital marketing", "SEO", "social media", "marketing"]),
    ("digital", &["digital marketing", "SEO", "online marketing", "Google Ads"]),
    // Others
    ("mobile", &["mobile app", "React Native", "app development", "mobile"]),
    ("video", &["video editing", "media production", "editing"]),
    ("office", &["Microsoft Office", "Excel", "office management"]),
    ("shopify", &["e-commerce", "Shopify", "online store"]),
];

/// Category substring -> keywords
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("programming", &["programming", "coding"]),
    ("security", &["security", "cybersecurity"]),
    ("design", &["design", "creative"]),
    ("marketing", &["marketing", "digital"]),
    ("development", &["development", "programming"]),
];

pub const FREE_KEYWORDS: &[&str] = &["free", "NAVTTC", "government program"];
pub const PAID_KEYWORDS: &[&str] = &["professional", "certification", "internship"];

/// Keywords every description gives truncation priority to, before the course's own first word
pub const BASE_PRIORITY_KEYWORDS: &[&str] = &["Faisalabad", "IT training"];

pub fn course_type_keywords(course_type: CourseType) -> &'static [&'static str] {
    match course_type {
        CourseType::Free => FREE_KEYWORDS,
        CourseType::Paid => PAID_KEYWORDS,
    }
}

/// Append values not already present, keeping first-seen order
fn push_unique(keywords: &mut Vec<String>, values: &[&str]) {
    for value in values {
        if !keywords.iter().any(|existing| existing == value) {
            keywords.push((*value).to_string());
        }
    }
}

/// Topic keywords from the course name and category
pub fn course_specific_keywords(course_name: &str, category: &str) -> Vec<String> {
    let name = course_name.to_lowercase();
    let category = category.to_lowercase();
    let mut keywords = Vec::new();

    for (topic, values) in COURSE_TOPIC_KEYWORDS {
        if name.contains(topic) {
            push_unique(&mut keywords, values);
        }
    }

    for (topic, values) in CATEGORY_KEYWORDS {
        if category.contains(topic) {
            push_unique(&mut keywords, values);
        }
    }

    keywords
}

/// Full preserve list: base keywords, topic keywords, then course-type terms, deduplicated
pub fn preserve_keywords(
    base: &[String],
    course_name: &str,
    category: &str,
    course_type: CourseType,
) -> Vec<String> {
    let mut keywords = Vec::with_capacity(base.len() + 16);
    for keyword in base {
        if !keywords.contains(keyword) {
            keywords.push(keyword.clone());
        }
    }

    let topic = course_specific_keywords(course_name, category);
    let topic: Vec<&str> = topic.iter().map(String::as_str).collect();
    push_unique(&mut keywords, &topic);
    push_unique(&mut keywords, course_type_keywords(course_type));

    keywords
}

/// Default priority list: the base priorities plus the course name's first word, lowercased
pub fn default_priority_keywords(course_name: &str) -> Vec<String> {
    let mut keywords: Vec<String> = BASE_PRIORITY_KEYWORDS.iter().map(|k| k.to_string()).collect();

    if let Some(first_word) = course_name.split_whitespace().next() {
        keywords.push(first_word.to_lowercase());
    }

    keywords
}

pub fn standard_keywords() -> Vec<String> {
    STANDARD_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
