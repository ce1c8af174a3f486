use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Utc};
use common::{parent_dir, MediaFile, KILOBYTE};

use crate::CheckOutcome;

const SUBJECT: &str = "scan document";

#[derive(Clone, Debug)]
pub struct TagRules {
    pub minimum_filesize: u64,
    pub present_year: i32,
}

impl Default for TagRules {
    fn default() -> Self {
        Self {
            minimum_filesize: 10 * KILOBYTE,
            present_year: Utc::now().year(),
        }
    }
}

pub fn check_years(files: &[MediaFile], rules: &TagRules) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("tag year", SUBJECT);
    for file in files {
        if file.year <= 0 {
            outcome.fail(format!("{}: year {} is not positive", file.path, file.year));
        } else if file.year > rules.present_year {
            outcome.fail(format!("{}: year {} is in the future", file.path, file.year));
        }
    }
    outcome
}

pub fn check_min_size(files: &[MediaFile], rules: &TagRules) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("minimum file size", SUBJECT);
    for file in files {
        if file.size < rules.minimum_filesize {
            outcome.fail(format!(
                "{}: {} bytes is below the {} byte minimum",
                file.path, file.size, rules.minimum_filesize
            ));
        }
    }
    outcome
}

pub fn check_artists_present(files: &[MediaFile]) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("artist tags", SUBJECT);
    for file in files {
        if file.artist.is_empty() {
            outcome.fail(format!("{}: empty artist", file.path));
        }
        if file.album_artist.is_empty() {
            outcome.fail(format!("{}: empty album artist", file.path));
        }
    }
    outcome
}

/// Track artists may vary ("X feat. Y") but every track in one album folder
/// carries the same album artist.
pub fn check_album_artist_consistency(files: &[MediaFile]) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("album artist consistency", SUBJECT);
    let mut albums: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for file in files {
        albums
            .entry(parent_dir(&file.path))
            .or_default()
            .insert(file.album_artist.as_str());
    }
    for (folder, artists) in albums {
        if artists.len() > 1 {
            let artists: Vec<&str> = artists.into_iter().collect();
            outcome.fail(format!(
                "{}: album artists differ: {}",
                folder,
                artists.join(" | ")
            ));
        }
    }
    outcome
}

/// Artist names that only differ by letter case ("Of Montreal" vs "of Montreal").
pub fn check_artist_casing(files: &[MediaFile]) -> CheckOutcome {
    let mut outcome = CheckOutcome::new("artist casing", SUBJECT);
    let mut spellings: BTreeMap<String, BTreeSet<&str>> = BTreeMap::new();
    for file in files {
        for name in [file.artist.as_str(), file.album_artist.as_str()] {
            if name.is_empty() {
                continue;
            }
            spellings.entry(name.to_lowercase()).or_default().insert(name);
        }
    }
    for variants in spellings.into_values() {
        if variants.len() > 1 {
            let variants: Vec<&str> = variants.into_iter().collect();
            outcome.fail(format!("inconsistent casing: {}", variants.join(" | ")));
        }
    }
    outcome
}

pub fn run_tag_checks(files: &[MediaFile], rules: &TagRules) -> Vec<CheckOutcome> {
    vec![
        check_years(files, rules),
        check_min_size(files, rules),
        check_artists_present(files),
        check_album_artist_consistency(files),
        check_artist_casing(files),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(path: &str, artist: &str, album_artist: &str, year: i32, size: u64) -> MediaFile {
        MediaFile {
            path: path.to_string(),
            size,
            format: "mp3".to_string(),
            title: "Title".to_string(),
            artist: artist.to_string(),
            album_artist: album_artist.to_string(),
            album: "Album".to_string(),
            genre: "Rock".to_string(),
            year,
            duration: 200,
        }
    }

    fn rules() -> TagRules {
        TagRules {
            minimum_filesize: 10 * KILOBYTE,
            present_year: 2024,
        }
    }

    #[test]
    fn clean_tags_pass() {
        let files = vec![
            track("/data/Music/Dr. Dre/2001 [1999]/01.mp3", "Dr. Dre", "Dr. Dre", 1999, 5_000_000),
            track(
                "/data/Music/Dr. Dre/2001 [1999]/02.mp3",
                "Dr. Dre feat. Snoop Dogg",
                "Dr. Dre",
                1999,
                5_000_000,
            ),
        ];
        for outcome in run_tag_checks(&files, &rules()) {
            assert!(outcome.passed(), "{}: {:?}", outcome.name, outcome.failures);
        }
    }

    #[test]
    fn years_must_be_positive_and_not_future() {
        let files = vec![
            track("/a/01.mp3", "A", "A", 0, 50_000),
            track("/a/02.mp3", "A", "A", 2031, 50_000),
            track("/a/03.mp3", "A", "A", 2024, 50_000),
        ];
        let outcome = check_years(&files, &rules());
        assert_eq!(outcome.failures.len(), 2);
        assert!(outcome.failures[0].contains("/a/01.mp3"));
        assert!(outcome.failures[1].contains("future"));
    }

    #[test]
    fn small_files_flagged() {
        let files = vec![
            track("/a/01.mp3", "A", "A", 2000, 9_999),
            track("/a/02.mp3", "A", "A", 2000, 10_000),
        ];
        let outcome = check_min_size(&files, &rules());
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].starts_with("/a/01.mp3"));
    }

    #[test]
    fn empty_artists_flagged() {
        let files = vec![track("/a/01.mp3", "", "", 2000, 50_000)];
        let outcome = check_artists_present(&files);
        assert_eq!(outcome.failures.len(), 2);
    }

    #[test]
    fn album_artist_must_match_within_folder() {
        let files = vec![
            track("/m/A/Album [2000]/01.mp3", "A", "A", 2000, 50_000),
            track("/m/A/Album [2000]/02.mp3", "A", "A & B", 2000, 50_000),
            track("/m/B/Other [2001]/01.mp3", "B", "B", 2001, 50_000),
        ];
        let outcome = check_album_artist_consistency(&files);
        assert_eq!(
            outcome.failures,
            vec!["/m/A/Album [2000]: album artists differ: A | A & B".to_string()]
        );
    }

    #[test]
    fn artist_casing_variants_flagged() {
        let files = vec![
            track("/m/x/1.mp3", "Of Montreal", "Of Montreal", 2005, 50_000),
            track("/m/y/1.mp3", "of Montreal", "of Montreal", 2007, 50_000),
            track("/m/z/1.mp3", "Beck", "Beck", 1996, 50_000),
        ];
        let outcome = check_artist_casing(&files);
        assert_eq!(
            outcome.failures,
            vec!["inconsistent casing: Of Montreal | of Montreal".to_string()]
        );
    }
}
