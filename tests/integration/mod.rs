// Integration test utilities and common code
// WHY: Centralized fixtures avoid duplicating catalog setup across integration tests

#![allow(dead_code)]

use cardtext::CourseCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The site's course catalog used as realistic test input
pub const COURSES_JSON: &str = include_str!("../fixtures/courses.json");

/// A Paid-course description of just over 600 characters
pub const LONG_PAID_DESCRIPTION: &str = "Join our professional full stack web development program in Faisalabad and learn \
    to build modern applications from scratch. Every batch includes a guaranteed internship with a partner software \
    house so you graduate with real experience. You will work with HTML, CSS, JavaScript, React, Node.js, Express and \
    MongoDB while following industry workflows, writing tests, reviewing code with mentors and deploying to cloud \
    servers. Weekend and evening batches are available for working students, and our career office helps every \
    graduate prepare a portfolio, practice interviews and apply for jobs across Pakistan.";

/// Parse the fixture catalog
pub fn fixture_catalog() -> CourseCatalog {
    CourseCatalog::from_json_str(COURSES_JSON).expect("Fixture catalog should parse")
}

/// Temporary directory holding catalog and config files for CLI-style tests
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file relative to the fixture root, creating parent directories
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write the fixture catalog into the temp directory
    pub fn create_catalog(&self) -> PathBuf {
        self.create_file("data/courses.json", COURSES_JSON)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
