//! Genre partition of the collection into destination libraries.
//!
//! A [`Partition`] assigns every genre of the catalog to exactly one
//! [`Library`]. [`check_partition`] verifies that assignment without looking
//! at any file, and [`GenreValidator`] files each scanned record into its
//! library and checks its genre against the active [`PolicyMode`].

mod partition;
mod validate;

use std::collections::HashSet;
use std::fmt;

use genres::GenreId;
use serde::{Deserialize, Serialize};

pub use partition::{check_partition, PartitionError, PartitionViolation};
pub use validate::{FileFailure, FileValidation, GenreReport, GenreValidator, Verdict};

/// Whether a library's genre list names what it accepts or what it refuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    #[default]
    Whitelist,
    Blacklist,
}

impl fmt::Display for PolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyMode::Whitelist => f.write_str("whitelist"),
            PolicyMode::Blacklist => f.write_str("blacklist"),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Library {
    pub name: String,
    /// Files belong to this library when their path contains this string.
    pub media_path: String,
    /// Kept as a list so a genre assigned twice is still visible to the checks.
    pub genres: Vec<GenreId>,
    pub expected_media_count: usize,
    pub expected_lrc_count: usize,
    pub size_limit_bytes: u64,
    pub expected_size_bytes: u64,
}

impl Library {
    pub fn new<I, G>(name: impl Into<String>, media_path: impl Into<String>, genres: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GenreId>,
    {
        Self {
            name: name.into(),
            media_path: media_path.into(),
            genres: genres.into_iter().map(Into::into).collect(),
            expected_media_count: 0,
            expected_lrc_count: 0,
            size_limit_bytes: 0,
            expected_size_bytes: 0,
        }
    }

    pub fn with_expected_counts(mut self, media: usize, lrc: usize) -> Self {
        self.expected_media_count = media;
        self.expected_lrc_count = lrc;
        self
    }

    pub fn with_size_budget(mut self, limit_bytes: u64, expected_bytes: u64) -> Self {
        self.size_limit_bytes = limit_bytes;
        self.expected_size_bytes = expected_bytes;
        self
    }

    pub fn routes(&self, path: &str) -> bool {
        !self.media_path.is_empty() && path.contains(self.media_path.as_str())
    }

    pub fn genre_set(&self) -> HashSet<&GenreId> {
        self.genres.iter().collect()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Partition {
    libraries: Vec<Library>,
    mode: PolicyMode,
}

impl Partition {
    pub fn new(libraries: Vec<Library>, mode: PolicyMode) -> Self {
        Self { libraries, mode }
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    pub fn mode(&self) -> PolicyMode {
        self.mode
    }
}
