use std::collections::HashSet;
use std::fmt;

use common::MediaFile;
use genres::{GenreCatalog, GenreId};
use serde::Serialize;
use tracing::{debug, info};

use crate::{check_partition, Library, Partition, PartitionError, PolicyMode};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileFailure {
    UnknownGenre { genre: String },
    /// Zero or several library paths occur in the file path.
    Unclassified { matches: Vec<String> },
    NotPermitted { library: String, genre: GenreId },
    Prohibited { library: String, genre: GenreId },
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFailure::UnknownGenre { genre } => write!(f, "genre {:?} not in catalog", genre),
            FileFailure::Unclassified { matches } if matches.is_empty() => {
                write!(f, "cannot classify file to a library: no library path matches")
            }
            FileFailure::Unclassified { matches } => write!(
                f,
                "cannot classify file to a library: matches {}",
                matches.join(", ")
            ),
            FileFailure::NotPermitted { library, genre } => {
                write!(f, "genre {} not permitted in this library ({})", genre, library)
            }
            FileFailure::Prohibited { library, genre } => write!(
                f,
                "genre {} explicitly prohibited in this library ({})",
                genre, library
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "failure", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail(FileFailure),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn failure(&self) -> Option<&FileFailure> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(failure) => Some(failure),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileValidation {
    pub path: String,
    pub verdict: Verdict,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct GenreReport {
    pub results: Vec<FileValidation>,
}

impl GenreReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_pass()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &FileFailure)> {
        self.results
            .iter()
            .filter_map(|r| r.verdict.failure().map(|failure| (r.path.as_str(), failure)))
    }

    pub fn is_clean(&self) -> bool {
        self.results.iter().all(|r| r.verdict.is_pass())
    }
}

/// Catalog and partition that passed [`check_partition`]; the only way to
/// validate files against them.
#[derive(Debug)]
pub struct GenreValidator {
    catalog: GenreCatalog,
    partition: Partition,
    sets: Vec<HashSet<GenreId>>,
}

impl GenreValidator {
    pub fn new(catalog: GenreCatalog, partition: Partition) -> Result<Self, PartitionError> {
        check_partition(&catalog, &partition)?;
        let sets = partition
            .libraries()
            .iter()
            .map(|library| library.genres.iter().cloned().collect())
            .collect();
        info!(
            "Genre partition OK: {} libraries, {} genres, {} mode",
            partition.libraries().len(),
            catalog.len(),
            partition.mode()
        );
        Ok(Self {
            catalog,
            partition,
            sets,
        })
    }

    pub fn catalog(&self) -> &GenreCatalog {
        &self.catalog
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Index of the single library whose media path occurs in `path`.
    pub fn route(&self, path: &str) -> Result<usize, FileFailure> {
        let matched: Vec<usize> = self
            .partition
            .libraries()
            .iter()
            .enumerate()
            .filter(|(_, library)| library.routes(path))
            .map(|(idx, _)| idx)
            .collect();
        match matched.as_slice() {
            [idx] => Ok(*idx),
            _ => Err(FileFailure::Unclassified {
                matches: matched
                    .iter()
                    .map(|&idx| self.partition.libraries()[idx].name.clone())
                    .collect(),
            }),
        }
    }

    /// Checks one record. The genre is resolved before routing so that an
    /// unknown label is always reported as such.
    pub fn validate(&self, file: &MediaFile) -> Verdict {
        match self.classify(file) {
            Ok(()) => Verdict::Pass,
            Err(failure) => Verdict::Fail(failure),
        }
    }

    pub fn validate_all(&self, files: &[MediaFile]) -> GenreReport {
        let results: Vec<FileValidation> = files
            .iter()
            .map(|file| {
                let verdict = self.validate(file);
                if let Verdict::Fail(failure) = &verdict {
                    debug!("{}: {}", file.path, failure);
                }
                FileValidation {
                    path: file.path.clone(),
                    verdict,
                }
            })
            .collect();
        let report = GenreReport { results };
        info!(
            "Genre check: {} files, {} passed",
            report.results.len(),
            report.passed()
        );
        report
    }

    fn classify(&self, file: &MediaFile) -> Result<(), FileFailure> {
        let genre = self
            .catalog
            .resolve(&file.genre)
            .ok_or_else(|| FileFailure::UnknownGenre {
                genre: file.genre.clone(),
            })?;
        let idx = self.route(&file.path)?;
        let library: &Library = &self.partition.libraries()[idx];
        let listed = self.sets[idx].contains(genre);
        match (self.partition.mode(), listed) {
            (PolicyMode::Whitelist, true) | (PolicyMode::Blacklist, false) => Ok(()),
            (PolicyMode::Whitelist, false) => Err(FileFailure::NotPermitted {
                library: library.name.clone(),
                genre: genre.clone(),
            }),
            (PolicyMode::Blacklist, true) => Err(FileFailure::Prohibited {
                library: library.name.clone(),
                genre: genre.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> GenreCatalog {
        GenreCatalog::new([
            ("Rock", "Rock"),
            ("Pop", "Pop"),
            ("Jazz", "Jazz"),
            ("Classical", "Classical"),
        ])
        .unwrap()
    }

    fn validator(mode: PolicyMode) -> GenreValidator {
        let partition = Partition::new(
            vec![
                Library::new("A", "/data/Music/", ["Rock", "Pop"]),
                Library::new("B", "/data/MusicOther/", ["Jazz", "Classical"]),
            ],
            mode,
        );
        GenreValidator::new(catalog(), partition).unwrap()
    }

    fn file(path: &str, genre: &str) -> MediaFile {
        MediaFile {
            path: path.to_string(),
            size: 5_000_000,
            format: "mp3".to_string(),
            title: "Title".to_string(),
            artist: "Artist".to_string(),
            album_artist: "Artist".to_string(),
            album: "Album".to_string(),
            genre: genre.to_string(),
            year: 2001,
            duration: 200,
        }
    }

    #[test]
    fn whitelist_passes_listed_genre() {
        let v = validator(PolicyMode::Whitelist);
        assert_eq!(v.validate(&file("/data/Music/x.mp3", "Rock")), Verdict::Pass);
        assert_eq!(
            v.validate(&file("/data/MusicOther/y.mp3", "Classical")),
            Verdict::Pass
        );
    }

    #[test]
    fn whitelist_rejects_genre_of_other_library() {
        let v = validator(PolicyMode::Whitelist);
        let verdict = v.validate(&file("/data/Music/x.mp3", "Jazz"));
        assert_eq!(
            verdict,
            Verdict::Fail(FileFailure::NotPermitted {
                library: "A".to_string(),
                genre: GenreId::new("Jazz"),
            })
        );
        assert!(verdict
            .failure()
            .unwrap()
            .to_string()
            .contains("not permitted in this library"));
    }

    #[test]
    fn unmatched_path_cannot_be_classified() {
        let v = validator(PolicyMode::Whitelist);
        let verdict = v.validate(&file("/data/Unknown/z.mp3", "Rock"));
        assert_eq!(
            verdict,
            Verdict::Fail(FileFailure::Unclassified {
                matches: Vec::new()
            })
        );
        assert!(verdict.failure().unwrap().to_string().contains("cannot classify"));
    }

    #[test]
    fn path_in_two_libraries_cannot_be_classified() {
        let v = validator(PolicyMode::Whitelist);
        let verdict = v.validate(&file("/data/Music//data/MusicOther/z.mp3", "Rock"));
        assert_eq!(
            verdict,
            Verdict::Fail(FileFailure::Unclassified {
                matches: vec!["A".to_string(), "B".to_string()],
            })
        );
    }

    #[test]
    fn blacklist_inverts_membership() {
        let v = validator(PolicyMode::Blacklist);
        let verdict = v.validate(&file("/data/Music/x.mp3", "Rock"));
        assert_eq!(
            verdict,
            Verdict::Fail(FileFailure::Prohibited {
                library: "A".to_string(),
                genre: GenreId::new("Rock"),
            })
        );
        assert!(verdict
            .failure()
            .unwrap()
            .to_string()
            .contains("explicitly prohibited"));
        assert_eq!(v.validate(&file("/data/Music/x.mp3", "Jazz")), Verdict::Pass);
    }

    #[test]
    fn unknown_genre_reported_in_lockstep_with_resolve() {
        let v = validator(PolicyMode::Whitelist);
        let files = [
            file("/data/Music/a.mp3", "rock"),
            file("/data/Unknown/b.mp3", "Polka"),
            file("/data/Music/c.mp3", "Rock"),
            file("/data/Unknown/d.mp3", "Jazz"),
            file("/data/MusicOther/e.mp3", " Jazz"),
        ];
        for f in &files {
            let unresolved = v.catalog().resolve(&f.genre).is_none();
            let reported = matches!(
                v.validate(f),
                Verdict::Fail(FileFailure::UnknownGenre { .. })
            );
            assert_eq!(unresolved, reported, "{}", f.path);
        }
    }

    #[test]
    fn results_follow_input_order() {
        let v = validator(PolicyMode::Whitelist);
        let files = vec![
            file("/data/Music/a.mp3", "Rock"),
            file("/data/Music/b.mp3", "Jazz"),
            file("/data/Unknown/c.mp3", "Pop"),
            file("/data/MusicOther/d.mp3", "Bebop"),
        ];
        let forward = v.validate_all(&files);
        let mut reversed_files = files.clone();
        reversed_files.reverse();
        let mut backward = v.validate_all(&reversed_files).results;
        backward.reverse();
        assert_eq!(forward.results, backward);
        assert_eq!(forward.passed(), 1);
        assert!(!forward.is_clean());
        let failed: Vec<&str> = forward.failures().map(|(path, _)| path).collect();
        assert_eq!(
            failed,
            vec!["/data/Music/b.mp3", "/data/Unknown/c.mp3", "/data/MusicOther/d.mp3"]
        );
    }

    #[test]
    fn refuses_invalid_partition() {
        let partition = Partition::new(
            vec![
                Library::new("A", "/data/Music/", ["Rock", "Pop"]),
                Library::new("B", "/data/MusicOther/", ["Rock", "Jazz", "Classical"]),
            ],
            PolicyMode::Whitelist,
        );
        let err = GenreValidator::new(catalog(), partition).unwrap_err();
        assert_eq!(err.violations.len(), 1);
    }

    #[test]
    fn validates_with_builtin_catalog() {
        let catalog = GenreCatalog::builtin().unwrap();
        let all: Vec<GenreId> = catalog.ids().cloned().collect();
        let partition = Partition::new(
            vec![Library::new("everything", "/data/Music/", all)],
            PolicyMode::Whitelist,
        );
        let v = GenreValidator::new(catalog, partition).unwrap();
        assert_eq!(v.validate(&file("/data/Music/x.mp3", "Hip-Hop")), Verdict::Pass);
        assert_eq!(
            v.validate(&file("/data/Music/x.mp3", "HipHop")),
            Verdict::Fail(FileFailure::UnknownGenre {
                genre: "HipHop".to_string()
            })
        );
    }
}
