//! Closed catalog of genre labels accepted in the collection.
//!
//! Every genre has a stable symbolic [`GenreId`] used by configuration and a
//! display label that must match the file's genre tag exactly. The two are
//! kept in a bijective table; lookups never trim or case-fold.

mod builtin;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use builtin::BUILTIN_GENRES;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl GenreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenreId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreEntry {
    pub id: GenreId,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct GenreCatalog {
    entries: Vec<GenreEntry>,
    by_id: HashMap<GenreId, usize>,
    by_label: HashMap<String, usize>,
}

impl GenreCatalog {
    /// Builds a catalog from `(id, label)` pairs.
    ///
    /// Fails when an id is listed twice or when two ids share a label; all
    /// offending entries are reported together.
    pub fn new<I, K, L>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<String>,
    {
        let mut catalog = Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
            by_label: HashMap::new(),
        };
        let mut violations = Vec::new();
        let mut label_owners: Vec<(String, Vec<GenreId>)> = Vec::new();
        let mut label_slots: HashMap<String, usize> = HashMap::new();

        for (id, label) in entries {
            let id = GenreId::new(id);
            let label = label.into();

            if catalog.by_id.contains_key(&id) {
                let violation = CatalogViolation::DuplicateId(id);
                if !violations.contains(&violation) {
                    violations.push(violation);
                }
                continue;
            }

            let slot = *label_slots.entry(label.clone()).or_insert_with(|| {
                label_owners.push((label.clone(), Vec::new()));
                label_owners.len() - 1
            });
            label_owners[slot].1.push(id.clone());

            let idx = catalog.entries.len();
            catalog.by_id.insert(id.clone(), idx);
            catalog.by_label.entry(label.clone()).or_insert(idx);
            catalog.entries.push(GenreEntry { id, label });
        }

        for (label, ids) in label_owners {
            if ids.len() > 1 {
                violations.push(CatalogViolation::LabelCollision { label, ids });
            }
        }

        if violations.is_empty() {
            Ok(catalog)
        } else {
            Err(CatalogError { violations })
        }
    }

    /// The collection's own catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(BUILTIN_GENRES.iter().copied())
    }

    /// Every permitted label, in table order.
    pub fn all_labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }

    /// Exact, case-sensitive label lookup.
    pub fn resolve(&self, label: &str) -> Option<&GenreId> {
        self.by_label
            .get(label)
            .map(|&idx| &self.entries[idx].id)
    }

    pub fn label(&self, id: &GenreId) -> Option<&str> {
        self.by_id
            .get(id)
            .map(|&idx| self.entries[idx].label.as_str())
    }

    pub fn contains(&self, id: &GenreId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &GenreId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    pub fn entries(&self) -> &[GenreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogViolation {
    DuplicateId(GenreId),
    LabelCollision { label: String, ids: Vec<GenreId> },
}

impl fmt::Display for CatalogViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogViolation::DuplicateId(id) => write!(f, "genre id {} listed more than once", id),
            CatalogViolation::LabelCollision { label, ids } => {
                let ids: Vec<&str> = ids.iter().map(GenreId::as_str).collect();
                write!(f, "label {:?} shared by genre ids {}", label, ids.join(", "))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogError {
    pub violations: Vec<CatalogViolation>,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid genre catalog")?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_passes_self_test() {
        let catalog = GenreCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), BUILTIN_GENRES.len());
        let labels: HashSet<&str> = catalog.all_labels().into_iter().collect();
        assert_eq!(labels.len(), catalog.len());
    }

    #[test]
    fn resolves_exact_labels_only() {
        let catalog = GenreCatalog::builtin().unwrap();
        assert_eq!(
            catalog.resolve("Hip-Hop français"),
            Some(&GenreId::new("HipHopFrançais"))
        );
        assert_eq!(catalog.resolve("R&B/Soul"), Some(&GenreId::new("RnBSoul")));
        assert_eq!(catalog.resolve("hip-hop"), None);
        assert_eq!(catalog.resolve("Jazz "), None);
        assert_eq!(catalog.resolve(""), None);
    }

    #[test]
    fn id_is_not_a_label() {
        let catalog = GenreCatalog::builtin().unwrap();
        assert_eq!(catalog.resolve("HipHop"), None);
        assert_eq!(catalog.label(&GenreId::new("HipHop")), Some("Hip-Hop"));
    }

    #[test]
    fn labels_round_trip_through_ids() {
        let catalog = GenreCatalog::builtin().unwrap();
        for entry in catalog.entries() {
            assert_eq!(catalog.resolve(&entry.label), Some(&entry.id));
            assert_eq!(catalog.label(&entry.id), Some(entry.label.as_str()));
        }
    }

    #[test]
    fn all_labels_keeps_table_order() {
        let catalog = GenreCatalog::new([("Rock", "Rock"), ("Jazz", "Jazz"), ("Pop", "Pop")]).unwrap();
        assert_eq!(catalog.all_labels(), vec!["Rock", "Jazz", "Pop"]);
    }

    #[test]
    fn rejects_label_collision() {
        let err = GenreCatalog::new([
            ("Rock", "Rock"),
            ("RockAlt", "Rock"),
            ("Jazz", "Jazz"),
        ])
        .unwrap_err();
        assert_eq!(
            err.violations,
            vec![CatalogViolation::LabelCollision {
                label: "Rock".to_string(),
                ids: vec![GenreId::new("Rock"), GenreId::new("RockAlt")],
            }]
        );
        assert!(err.to_string().contains("RockAlt"));
    }

    #[test]
    fn rejects_duplicate_ids_once() {
        let err = GenreCatalog::new([
            ("Rock", "Rock"),
            ("Rock", "Rock music"),
            ("Rock", "Rock"),
        ])
        .unwrap_err();
        assert_eq!(
            err.violations,
            vec![CatalogViolation::DuplicateId(GenreId::new("Rock"))]
        );
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = GenreCatalog::new(Vec::<(String, String)>::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.all_labels().is_empty());
    }
}
