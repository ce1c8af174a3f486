use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use common::{
    bytes_to_gb, file_ext, ART_EXTS, EXTRA_EXTS, LYRICS_EXTS, MEDIA_EXTS,
};
use library::Library;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{CheckOutcome, ChecksError};

// Windows-hostile characters and a few that break shells, then a [year] or [year-year] tag.
const ALBUM_NAME_PATTERN: &str = r#"^[^:?&#%{}\\.`$!<>*"+|=]*\[\d+(-\d+)?\]"#;
const ALBUM_YEAR_PATTERN: &str = r"\[(\d{4})\]";

const ARTIST_DEPTH: usize = 1;
const ALBUM_DEPTH: usize = 2;

#[derive(Clone, Debug)]
pub struct LayoutRules {
    pub media_exts: Vec<String>,
    pub allowed_exts: Vec<String>,
    /// `’` turns into `?` when ripped from CD; both question marks break burning on Windows.
    pub prohibited_chars: String,
    pub cover_name: String,
}

impl Default for LayoutRules {
    fn default() -> Self {
        let media_exts: Vec<String> = MEDIA_EXTS.iter().map(|ext| ext.to_string()).collect();
        let allowed_exts = [MEDIA_EXTS, ART_EXTS, LYRICS_EXTS, EXTRA_EXTS]
            .concat()
            .into_iter()
            .map(|ext| ext.to_string())
            .collect();
        Self {
            media_exts,
            allowed_exts,
            prohibited_chars: "’？?".to_string(),
            cover_name: "cover.jpg".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub media_files: usize,
    pub lrc_files: usize,
    pub txt_files: usize,
    pub total_bytes: u64,
}

#[derive(Debug, Default)]
struct DirSummary {
    depth: usize,
    subdirs: usize,
    files: Vec<String>,
}

#[derive(Debug)]
struct FileEntry {
    path: PathBuf,
    name: String,
    depth: usize,
    size: u64,
}

/// Snapshot of one library root: every folder and file below it.
#[derive(Debug)]
pub struct LibraryTree {
    root: PathBuf,
    dirs: BTreeMap<PathBuf, DirSummary>,
    files: Vec<FileEntry>,
}

impl LibraryTree {
    pub fn scan(root: &Path) -> Result<Self, ChecksError> {
        if !root.is_dir() {
            return Err(ChecksError::MissingRoot(root.to_path_buf()));
        }

        let mut dirs: BTreeMap<PathBuf, DirSummary> = BTreeMap::new();
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry under {:?}: {}", root, err);
                    continue;
                }
            };
            let path = entry.path().to_path_buf();
            let name = entry.file_name().to_string_lossy().to_string();
            let parent = path.parent().map(Path::to_path_buf);

            if entry.file_type().is_dir() {
                if let Some(summary) = parent.as_ref().and_then(|p| dirs.get_mut(p)) {
                    summary.subdirs += 1;
                }
                dirs.insert(
                    path,
                    DirSummary {
                        depth: entry.depth(),
                        ..DirSummary::default()
                    },
                );
                continue;
            }

            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    warn!("Failed to stat {:?}: {}", path, err);
                    0
                }
            };
            if let Some(summary) = parent.as_ref().and_then(|p| dirs.get_mut(p)) {
                summary.files.push(name.clone());
            }
            files.push(FileEntry {
                path,
                name,
                depth: entry.depth(),
                size,
            });
        }

        debug!(
            "Scanned {:?}: {} folders, {} files",
            root,
            dirs.len(),
            files.len()
        );
        Ok(Self {
            root: root.to_path_buf(),
            dirs,
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stats(&self, rules: &LayoutRules) -> TreeStats {
        let mut stats = TreeStats::default();
        for file in &self.files {
            stats.total_bytes += file.size;
            let ext = file_ext(&file.path).unwrap_or_default();
            if rules.media_exts.contains(&ext) {
                stats.media_files += 1;
            }
            match ext.as_str() {
                "lrc" => stats.lrc_files += 1,
                "txt" => stats.txt_files += 1,
                _ => {}
            }
        }
        stats
    }

    pub fn check_extensions(&self, rules: &LayoutRules) -> CheckOutcome {
        let mut outcome = CheckOutcome::new("allowed extensions", self.subject());
        for file in &self.files {
            let ext = file_ext(&file.path).unwrap_or_default();
            if !rules.allowed_exts.contains(&ext) {
                outcome.fail(format!("{} not in allowed extensions", file.path.display()));
            }
        }
        outcome
    }

    pub fn check_filenames(&self, rules: &LayoutRules) -> CheckOutcome {
        let mut outcome = CheckOutcome::new("file names", self.subject());
        for file in &self.files {
            for c in rules.prohibited_chars.chars() {
                if file.name.contains(c) {
                    outcome.fail(format!(
                        "character {} not allowed in file name {}",
                        c,
                        file.path.display()
                    ));
                }
            }
        }
        outcome
    }

    /// Artist folders hold only album folders; album folders hold media and no folders.
    pub fn check_nesting(&self, rules: &LayoutRules) -> CheckOutcome {
        let mut outcome = CheckOutcome::new("folder nesting", self.subject());
        for file in &self.files {
            if file.depth == ARTIST_DEPTH {
                outcome.fail(format!("file outside an album folder: {}", file.path.display()));
            }
        }
        for (path, dir) in &self.dirs {
            match dir.depth {
                ARTIST_DEPTH => {
                    if !dir.files.is_empty() {
                        outcome.fail(format!("artist folder contains files: {}", path.display()));
                    }
                    if dir.subdirs == 0 {
                        outcome.fail(format!("artist folder has no albums: {}", path.display()));
                    }
                }
                ALBUM_DEPTH => {
                    if dir.subdirs > 0 {
                        outcome.fail(format!("album folder contains folders: {}", path.display()));
                    }
                    let has_media = dir.files.iter().any(|name| {
                        file_ext(Path::new(name))
                            .map(|ext| rules.media_exts.contains(&ext))
                            .unwrap_or(false)
                    });
                    if !has_media {
                        outcome.fail(format!("album folder has no media: {}", path.display()));
                    }
                }
                _ => outcome.fail(format!("folder nested too deep: {}", path.display())),
            }
        }
        outcome
    }

    /// Album folders are named `Title [YYYY]` without problematic characters or edge whitespace.
    pub fn check_album_names(&self) -> Result<CheckOutcome, ChecksError> {
        let name_pattern = Regex::new(ALBUM_NAME_PATTERN)?;
        let year_pattern = Regex::new(ALBUM_YEAR_PATTERN)?;
        let mut outcome = CheckOutcome::new("album folder names", self.subject());

        for path in self.album_dirs() {
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            if !name_pattern.is_match(&name) || name != name.trim() {
                outcome.fail(format!("bad album folder name: {}", path.display()));
            } else if !year_pattern.is_match(&name) {
                outcome.fail(format!(
                    "bad album folder name (invalid year): {}",
                    path.display()
                ));
            }
        }
        Ok(outcome)
    }

    pub fn check_cover_art(&self, rules: &LayoutRules) -> CheckOutcome {
        let mut outcome = CheckOutcome::new("cover art", self.subject());
        for path in self.album_dirs() {
            let dir = &self.dirs[path];
            if !dir.files.iter().any(|name| name == &rules.cover_name) {
                outcome.fail(format!("missing {}: {}", rules.cover_name, path.display()));
            }
        }
        outcome
    }

    fn album_dirs(&self) -> impl Iterator<Item = &PathBuf> {
        self.dirs
            .iter()
            .filter(|(_, dir)| dir.depth == ALBUM_DEPTH)
            .map(|(path, _)| path)
    }

    fn subject(&self) -> String {
        self.root.display().to_string()
    }
}

pub fn check_counts(stats: &TreeStats, library: &Library) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("file counts", library.name.as_str());
    if stats.media_files != library.expected_media_count {
        outcome.fail(format!(
            "expected {} media files, found {}",
            library.expected_media_count, stats.media_files
        ));
    }
    if stats.lrc_files != library.expected_lrc_count {
        outcome.fail(format!(
            "expected {} lrc files, found {} ({} media files without synced lyrics)",
            library.expected_lrc_count,
            stats.lrc_files,
            stats.media_files.saturating_sub(stats.lrc_files)
        ));
    }
    outcome
}

/// A zero ceiling or expected size disables that half of the check.
/// Sizes are compared in whole GB, rounding halves to even.
pub fn check_size(stats: &TreeStats, library: &Library) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("total size", library.name.as_str());
    let size_gb = bytes_to_gb(stats.total_bytes);
    let rounded_gb = size_gb.round_ties_even();
    if library.size_limit_bytes > 0 && stats.total_bytes >= library.size_limit_bytes {
        outcome.fail(format!(
            "total size {:.2} GB is not below the {:.2} GB ceiling",
            size_gb,
            bytes_to_gb(library.size_limit_bytes)
        ));
    }
    if library.expected_size_bytes > 0 {
        let expected_gb = bytes_to_gb(library.expected_size_bytes).round_ties_even();
        if rounded_gb != expected_gb {
            outcome.fail(format!(
                "total size rounds to {} GB, expected {} GB",
                rounded_gb, expected_gb
            ));
        }
    }
    outcome
}

/// Runs every on-disk check for one library rooted at `root`.
pub fn check_library_layout(
    root: &Path,
    library: &Library,
    rules: &LayoutRules,
) -> Result<Vec<CheckOutcome>, ChecksError> {
    let tree = LibraryTree::scan(root)?;
    let stats = tree.stats(rules);
    debug!("{} at {:?}: {:?}", library.name, tree.root(), stats);
    Ok(vec![
        tree.check_extensions(rules),
        tree.check_filenames(rules),
        tree.check_nesting(rules),
        tree.check_album_names()?,
        tree.check_cover_art(rules),
        check_counts(&stats, library),
        check_size(&stats, library),
    ])
}
