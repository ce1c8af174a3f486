use std::collections::HashSet;
use std::fmt;

use genres::{GenreCatalog, GenreId};
use serde::Serialize;

use crate::Partition;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartitionViolation {
    NoLibraries,
    EmptyMediaPath {
        library: String,
    },
    DuplicateGenre {
        library: String,
        genre: GenreId,
    },
    UnknownGenre {
        library: String,
        genre: GenreId,
    },
    Overlap {
        first: String,
        second: String,
        genres: Vec<GenreId>,
    },
    Unassigned {
        genres: Vec<GenreId>,
    },
}

impl fmt::Display for PartitionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionViolation::NoLibraries => write!(f, "no libraries configured"),
            PartitionViolation::EmptyMediaPath { library } => {
                write!(f, "library {} has an empty media path", library)
            }
            PartitionViolation::DuplicateGenre { library, genre } => {
                write!(f, "duplicate genre in library {}: {}", library, genre)
            }
            PartitionViolation::UnknownGenre { library, genre } => {
                write!(f, "library {} names genre {} which is not in the catalog", library, genre)
            }
            PartitionViolation::Overlap {
                first,
                second,
                genres,
            } => write!(
                f,
                "genres in both {} and {}: {}",
                first,
                second,
                join_ids(genres)
            ),
            PartitionViolation::Unassigned { genres } => {
                write!(f, "genres not in any library: {}", join_ids(genres))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PartitionError {
    pub violations: Vec<PartitionViolation>,
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid genre partition")?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for PartitionError {}

/// Verifies the partition against the catalog, independent of any file data.
///
/// Every library pair is compared, not only neighbours. All violations are
/// collected; ids within a violation are sorted, unassigned ids follow
/// catalog order, so repeated runs produce identical output.
pub fn check_partition(catalog: &GenreCatalog, partition: &Partition) -> Result<(), PartitionError> {
    let libraries = partition.libraries();
    let mut violations = Vec::new();

    if libraries.is_empty() {
        violations.push(PartitionViolation::NoLibraries);
    }

    for library in libraries {
        if library.media_path.trim().is_empty() {
            violations.push(PartitionViolation::EmptyMediaPath {
                library: library.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        let mut repeated = HashSet::new();
        for genre in &library.genres {
            if !seen.insert(genre) {
                repeated.insert(genre);
            }
        }
        let mut repeated: Vec<&GenreId> = repeated.into_iter().collect();
        repeated.sort();
        for genre in repeated {
            violations.push(PartitionViolation::DuplicateGenre {
                library: library.name.clone(),
                genre: genre.clone(),
            });
        }

        let mut unknown: Vec<&GenreId> = seen
            .into_iter()
            .filter(|genre| !catalog.contains(genre))
            .collect();
        unknown.sort();
        for genre in unknown {
            violations.push(PartitionViolation::UnknownGenre {
                library: library.name.clone(),
                genre: genre.clone(),
            });
        }
    }

    let sets: Vec<HashSet<&GenreId>> = libraries.iter().map(|library| library.genre_set()).collect();
    for i in 0..libraries.len() {
        for j in (i + 1)..libraries.len() {
            let mut shared: Vec<GenreId> = sets[i]
                .intersection(&sets[j])
                .map(|genre| (*genre).clone())
                .collect();
            if shared.is_empty() {
                continue;
            }
            shared.sort();
            violations.push(PartitionViolation::Overlap {
                first: libraries[i].name.clone(),
                second: libraries[j].name.clone(),
                genres: shared,
            });
        }
    }

    let unassigned: Vec<GenreId> = catalog
        .ids()
        .filter(|genre| !sets.iter().any(|set| set.contains(genre)))
        .cloned()
        .collect();
    if !unassigned.is_empty() {
        violations.push(PartitionViolation::Unassigned { genres: unassigned });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(PartitionError { violations })
    }
}

fn join_ids(ids: &[GenreId]) -> String {
    let ids: Vec<&str> = ids.iter().map(GenreId::as_str).collect();
    ids.join(", ")
}
