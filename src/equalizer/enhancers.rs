// WHY: Deterministic filler sentences used to lengthen short course descriptions
// Pools are appended in fixed order: generic, course type, then course topic

use crate::catalog::CourseType;
use crate::text_optimization::char_len;

pub const GENERIC_ENHANCERS: &[&str] = &[
    "Learn practical IT skills training at our leading computer training institute Faisalabad with hands-on experience and industry-standard tools",
    "Gain industry-recognized certification upon completion with comprehensive exam preparation and professional portfolio development",
    "Expert instructors with real-world experience guide your learning journey through structured modules and practical assignments",
    "Hands-on projects and practical exercises included with real client work and professional mentorship throughout the program",
];

pub const FREE_ENHANCERS: &[&str] = &[
    "Part of Prime Minister Youth Skills Development Program with internationally recognized certification and career guidance",
    "NAVTTC certified training program providing government-endorsed qualifications for professional advancement",
    "Government-funded professional education opportunity with complete training materials and expert mentorship included",
];

pub const PAID_ENHANCERS: &[&str] = &[
    "Includes 2-month professional internship placement with leading companies and guaranteed job placement assistance",
    "Industry-focused curriculum with job placement assistance, interview preparation, and professional networking opportunities",
    "Professional certification recognized by top employers with comprehensive career support and alumni network access",
];

/// Course-name substring -> topic sentences
pub const TOPIC_ENHANCERS: &[(&str, &[&str])] = &[
    (
        "python",
        &[
            "Master Django framework and web development with database integration and deployment strategies",
            "Build real-world applications including e-commerce platforms, APIs, and data analysis projects",
        ],
    ),
    (
        "javascript",
        &[
            "Learn MERN/MEAN stack development with React, Node.js, and MongoDB for full-stack applications",
            "Modern JavaScript frameworks training including ES6+, async programming, and testing methodologies",
        ],
    ),
    (
        "security",
        &[
            "Ethical hacking and penetration testing included with advanced vulnerability assessment and incident response",
            "Industry-standard security tools training covering network security, cryptography, and forensic investigation",
        ],
    ),
    (
        "cloud",
        &[
            "AWS and Microsoft Azure certification preparation included with hands-on labs and practice exams for professional credentials",
            "Hands-on cloud deployment experience with serverless computing, containerization, and DevOps automation",
        ],
    ),
    (
        "design",
        &[
            "Adobe Creative Suite mastery with advanced techniques in Photoshop, Illustrator, and professional workflow",
            "Portfolio development guidance with client project experience and industry-standard design principles",
        ],
    ),
    (
        "marketing",
        &[
            "Google Ads and SEO optimization training with campaign management and analytics interpretation",
            "Real campaign management experience with social media marketing, content strategy, and conversion optimization",
        ],
    ),
];

/// Stop extending once the text is this close to the target
pub const EXTEND_STOP_GAP: usize = 20;
/// Sentences appended at most in the light extension band
pub const LIGHT_EXTEND_MAX_SENTENCES: usize = 2;

/// Enhancer pools selected for one course
#[derive(Debug, Clone)]
pub struct EnhancerSet {
    pub generic: &'static [&'static str],
    pub course_type: &'static [&'static str],
    pub topic: Vec<&'static str>,
}

impl EnhancerSet {
    pub fn for_course(course_name: &str, course_type: CourseType) -> Self {
        let name = course_name.to_lowercase();
        let topic = TOPIC_ENHANCERS
            .iter()
            .filter(|(key, _)| name.contains(key))
            .flat_map(|(_, sentences)| sentences.iter().copied())
            .collect();

        Self {
            generic: GENERIC_ENHANCERS,
            course_type: match course_type {
                CourseType::Free => FREE_ENHANCERS,
                CourseType::Paid => PAID_ENHANCERS,
            },
            topic,
        }
    }

    /// All sentences in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generic
            .iter()
            .chain(self.course_type.iter())
            .copied()
            .chain(self.topic.iter().copied())
    }

    fn shortest_course_type_sentence(&self) -> Option<usize> {
        self.course_type.iter().map(|s| char_len(s)).min()
    }
}

/// Separator placed before the next sentence
fn separator(text: &str) -> &'static str {
    if text.is_empty() {
        ""
    } else if text.ends_with('.') {
        " "
    } else {
        ". "
    }
}

/// Length of `text` after appending `sentence`
fn appended_len(text: &str, sentence: &str) -> usize {
    char_len(text) + separator(text).len() + char_len(sentence)
}

fn append(text: &mut String, sentence: &str) {
    let sep = separator(text);
    text.push_str(sep);
    text.push_str(sentence);
}

/// Lengthen a short description toward `target_length`
/// WHY: room for the shortest course-type sentence is held back while generic sentences are
/// chosen, so an extended description names its Free/Paid program whenever one can fit
pub fn extend_description(
    description: &str,
    enhancers: &EnhancerSet,
    target_length: usize,
) -> String {
    let mut text = description.to_string();
    let stop_at = target_length.saturating_sub(EXTEND_STOP_GAP);
    let reserve = enhancers
        .shortest_course_type_sentence()
        .map(|len| len + ". ".len())
        .unwrap_or(0);

    for sentence in enhancers.generic {
        if appended_len(&text, sentence) + reserve <= target_length {
            append(&mut text, sentence);
        }
        if char_len(&text) >= stop_at {
            return text;
        }
    }

    for sentence in enhancers.course_type.iter().chain(enhancers.topic.iter()) {
        if appended_len(&text, sentence) <= target_length {
            append(&mut text, sentence);
        }
        if char_len(&text) >= stop_at {
            return text;
        }
    }

    text
}

/// Add at most two sentences to a description already above the minimum length
pub fn extend_description_lightly(
    description: &str,
    enhancers: &EnhancerSet,
    target_length: usize,
) -> String {
    let mut text = description.to_string();
    let stop_at = target_length.saturating_sub(EXTEND_STOP_GAP);
    let mut appended = 0;

    for sentence in enhancers.iter() {
        if appended >= LIGHT_EXTEND_MAX_SENTENCES || char_len(&text) >= stop_at {
            break;
        }
        if appended_len(&text, sentence) <= target_length {
            append(&mut text, sentence);
            appended += 1;
        }
    }

    text
}
