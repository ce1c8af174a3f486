use serde::{Deserialize, Serialize};
use std::path::Path;

pub const KILOBYTE: u64 = 1_000;
pub const GIGABYTE: u64 = 1_000_000_000;

// Extensions are lowercase on purpose; ".JPG" is drift.
pub const MEDIA_EXTS: &[&str] = &["mp3", "m4a"];
pub const ART_EXTS: &[&str] = &["jpg", "webp", "png", "xcf"];
pub const LYRICS_EXTS: &[&str] = &["lrc", "txt"];
pub const EXTRA_EXTS: &[&str] = &["pdf"];

/// One scanned media file, as written by `mediascan` and read back by the checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub path: String,
    pub size: u64,
    pub format: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, rename = "albumartist")]
    pub album_artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub duration: u64,
}

/// The scan document: every media file found under the library roots.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MediaFiles {
    #[serde(default)]
    pub mediafiles: Vec<MediaFile>,
}

/// Extension without the leading dot, exactly as spelled on disk.
pub fn file_ext(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_string())
}

pub fn is_media_file(path: &Path) -> bool {
    file_ext(path)
        .map(|ext| MEDIA_EXTS.contains(&ext.as_str()))
        .unwrap_or(false)
}

pub fn relpath_from(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(path_to_slash_string(rel))
}

/// Directory portion of a slash-separated path string.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / GIGABYTE as f64
}

fn path_to_slash_string(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_keeps_case() {
        assert_eq!(file_ext(Path::new("a/b/cover.JPG")).as_deref(), Some("JPG"));
        assert_eq!(file_ext(Path::new("a/b/track.mp3")).as_deref(), Some("mp3"));
        assert_eq!(file_ext(Path::new("a/b/README")), None);
    }

    #[test]
    fn media_detection_is_case_sensitive() {
        assert!(is_media_file(Path::new("x/01.mp3")));
        assert!(is_media_file(Path::new("x/01.m4a")));
        assert!(!is_media_file(Path::new("x/01.MP3")));
        assert!(!is_media_file(Path::new("x/cover.jpg")));
    }

    #[test]
    fn relpath_uses_forward_slashes() {
        let root = PathBuf::from("/data/Music");
        let path = root.join("Artist").join("Album [2001]").join("01.mp3");
        assert_eq!(
            relpath_from(&root, &path).as_deref(),
            Some("Artist/Album [2001]/01.mp3")
        );
    }

    #[test]
    fn parent_dir_strips_file_name() {
        assert_eq!(parent_dir("/data/Music/A/B [2000]/01.mp3"), "/data/Music/A/B [2000]");
        assert_eq!(parent_dir("01.mp3"), "");
    }

    #[test]
    fn scan_document_reads_albumartist_key() {
        let yaml = r#"
mediafiles:
  - path: /data/Music/Artist/Album [2001]/01.mp3
    size: 4000000
    format: mp3
    title: Intro
    artist: Artist
    albumartist: Artist
    album: Album
    genre: Rock
    year: 2001
    duration: 180
"#;
        let doc: MediaFiles = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.mediafiles.len(), 1);
        assert_eq!(doc.mediafiles[0].album_artist, "Artist");
        assert_eq!(doc.mediafiles[0].size, 4_000_000);
    }
}
