// WHY: Typed course records read from the site's JSON catalog
// Keeps file I/O out of the pure text functions; the CLI and tests load catalogs through here

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::equalizer::EqualizedCourse;
use crate::text_optimization::normalize_whitespace_into;

/// Free government-funded course or paid course
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseType {
    Free,
    Paid,
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseType::Free => write!(f, "Free"),
            CourseType::Paid => write!(f, "Paid"),
        }
    }
}

/// One course record; fields the text pipeline does not use are ignored on load
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub course_type: CourseType,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// In-memory course catalog
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Parse a JSON array of courses
    pub fn from_json_str(content: &str) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_str(content)
            .context("Catalog is not a JSON array of course records")?;
        debug!("Parsed {} courses", courses.len());
        Ok(Self { courses })
    }

    /// Load catalog from a JSON file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;

        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

        info!("Loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses of one type, in catalog order
    pub fn filter_by_type(&self, course_type: CourseType) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|course| course.course_type == course_type)
            .cloned()
            .collect()
    }
}

/// Collapse whitespace in every description through one scratch buffer
/// Already-normalized descriptions are left untouched
pub fn normalize_descriptions(courses: &mut [Course]) {
    let mut buffer = String::new();
    let mut changed = 0;

    for course in courses.iter_mut() {
        normalize_whitespace_into(&course.description, &mut buffer);
        if buffer != course.description {
            course.description.clear();
            course.description.push_str(&buffer);
            changed += 1;
        }
    }

    debug!(changed, total = courses.len(), "Normalized course descriptions");
}

/// Write an equalization report as pretty JSON
pub async fn write_report(path: &Path, report: &[EqualizedCourse]) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(())
}
