//! Drift checks around the genre partition: on-disk layout and capacity of
//! each library root, and tag sanity over the scan document.

pub mod layout;
pub mod tags;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub use layout::{check_library_layout, LayoutRules, LibraryTree, TreeStats};
pub use tags::{run_tag_checks, TagRules};

/// Result of one named check over one subject (a library root or the scan document).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub subject: String,
    pub failures: Vec<String>,
}

impl CheckOutcome {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            failures: Vec::new(),
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.failures.push(message.into());
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug)]
pub enum ChecksError {
    MissingRoot(PathBuf),
    Pattern(regex::Error),
}

impl fmt::Display for ChecksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksError::MissingRoot(path) => write!(f, "library root not found: {:?}", path),
            ChecksError::Pattern(err) => write!(f, "pattern error: {}", err),
        }
    }
}

impl std::error::Error for ChecksError {}

impl From<regex::Error> for ChecksError {
    fn from(err: regex::Error) -> Self {
        ChecksError::Pattern(err)
    }
}
