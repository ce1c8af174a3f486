use std::fmt;
use std::fs;
use std::path::Path;

use common::{file_ext, MediaFile};
use lofty::error::LoftyError;
use lofty::prelude::{AudioFile, ItemKey, TaggedFileExt};

#[derive(Debug)]
pub enum MetadataError {
    Io(std::io::Error),
    Lofty(LoftyError),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::Io(err) => write!(f, "io error: {}", err),
            MetadataError::Lofty(err) => write!(f, "tag error: {}", err),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::Io(err)
    }
}

impl From<LoftyError> for MetadataError {
    fn from(err: LoftyError) -> Self {
        MetadataError::Lofty(err)
    }
}

/// Reads one audio file into a scan record.
///
/// Tag values are copied verbatim; in particular the genre is neither split
/// nor normalised, since the checks compare it exactly. Missing tags become
/// empty strings and a missing year becomes 0, which the tag checks report.
pub fn read_media_file(path: &Path) -> Result<MediaFile, MetadataError> {
    let size = fs::metadata(path)?.len();
    let tagged_file = lofty::read_from_path(path)?;
    let properties = tagged_file.properties();

    let mut file = MediaFile {
        path: path.to_string_lossy().to_string(),
        size,
        format: file_ext(path).unwrap_or_default(),
        title: String::new(),
        artist: String::new(),
        album_artist: String::new(),
        album: String::new(),
        genre: String::new(),
        year: 0,
        duration: properties.duration().as_secs(),
    };

    if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
        let text = |key: &ItemKey| tag.get_string(key).map(|v| v.to_string()).unwrap_or_default();
        file.title = text(&ItemKey::TrackTitle);
        file.artist = text(&ItemKey::TrackArtist);
        file.album_artist = text(&ItemKey::AlbumArtist);
        file.album = text(&ItemKey::AlbumTitle);
        file.genre = text(&ItemKey::Genre);
        file.year = tag
            .get_string(&ItemKey::Year)
            .or_else(|| tag.get_string(&ItemKey::RecordingDate))
            .and_then(parse_year)
            .unwrap_or(0);
    }

    Ok(file)
}

fn parse_year(text: &str) -> Option<i32> {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            if digits.len() == 4 {
                break;
            }
        } else if !digits.is_empty() {
            break;
        }
    }
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_year, read_media_file, MetadataError};
    use lofty::config::WriteOptions;
    use lofty::prelude::{Accessor, ItemKey, TagExt};
    use lofty::tag::{Tag, TagType};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const FRAME_LEN: usize = 417;
    const FRAMES: usize = 100;

    // Silent MPEG-1 Layer III at 128 kbps / 44.1 kHz, about 2.6 seconds.
    fn write_tagged_mp3(path: &Path, genre: &str, date: &str) {
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        fs::write(path, frame.repeat(FRAMES)).unwrap();

        let mut tag = Tag::new(TagType::Id3v2);
        tag.set_title("Intro".to_string());
        tag.set_artist("IAM feat. Method Man".to_string());
        tag.set_album("L'école du micro d'argent".to_string());
        tag.set_genre(genre.to_string());
        tag.insert_text(ItemKey::AlbumArtist, "IAM".to_string());
        tag.insert_text(ItemKey::RecordingDate, date.to_string());
        tag.save_to_path(path, WriteOptions::default()).unwrap();
    }

    #[test]
    fn reads_tags_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("01 Intro.mp3");
        write_tagged_mp3(&path, "Hip-Hop français", "2004-05-17");

        let file = read_media_file(&path).unwrap();
        assert_eq!(file.genre, "Hip-Hop français");
        assert_eq!(file.year, 2004);
        assert_eq!(file.title, "Intro");
        assert_eq!(file.artist, "IAM feat. Method Man");
        assert_eq!(file.album_artist, "IAM");
        assert_eq!(file.album, "L'école du micro d'argent");
        assert_eq!(file.format, "mp3");
        assert_eq!(file.path, path.to_string_lossy());
        assert_eq!(file.size, fs::metadata(&path).unwrap().len());
        assert!(file.size > (FRAME_LEN * FRAMES) as u64);
        assert!((2..=3).contains(&file.duration), "{}", file.duration);
    }

    #[test]
    fn multi_value_genre_is_not_split() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("02.mp3");
        write_tagged_mp3(&path, "Rock/Pop", "1999");

        let file = read_media_file(&path).unwrap();
        assert_eq!(file.genre, "Rock/Pop");
        assert_eq!(file.year, 1999);
    }

    #[test]
    fn untagged_track_has_empty_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("03.mp3");
        let mut frame = vec![0u8; FRAME_LEN];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        fs::write(&path, frame.repeat(FRAMES)).unwrap();

        let file = read_media_file(&path).unwrap();
        assert_eq!(file.genre, "");
        assert_eq!(file.album_artist, "");
        assert_eq!(file.year, 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_media_file(Path::new("/nonexistent/dir/01.mp3"));
        assert!(matches!(result, Err(MetadataError::Io(_))));
    }

    #[test]
    fn year_from_plain_and_dated_values() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year("2004-05-17"), Some(2004));
        assert_eq!(parse_year(" 1987 "), Some(1987));
    }

    #[test]
    fn year_missing_digits() {
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn short_year_kept_for_checks() {
        assert_eq!(parse_year("0"), Some(0));
    }
}
