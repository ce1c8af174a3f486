use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use checks::{LayoutRules, TagRules};
use common::{MediaFiles, GIGABYTE, KILOBYTE};
use library::{Library, Partition, PolicyMode};
use serde::{Deserialize, Serialize};

use crate::defaults::{PRIMARY_GENRES, SECONDARY_GENRES};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub name: String,
    pub media_path: String,
    pub expected_media_count: usize,
    pub expected_lrc_count: usize,
    pub total_filesize_limit_gb: u64,
    pub expected_filesize_gb: u64,
    pub genres: Vec<String>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            media_path: String::new(),
            expected_media_count: 0,
            expected_lrc_count: 0,
            total_filesize_limit_gb: 100,
            expected_filesize_gb: 0,
            genres: Vec::new(),
        }
    }
}

impl LibraryConfig {
    pub fn to_library(&self) -> Library {
        Library::new(
            self.name.as_str(),
            self.media_path.as_str(),
            self.genres.iter().map(String::as_str),
        )
        .with_expected_counts(self.expected_media_count, self.expected_lrc_count)
        .with_size_budget(
            self.total_filesize_limit_gb * GIGABYTE,
            self.expected_filesize_gb * GIGABYTE,
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MediatestConfig {
    pub version: u32,
    pub mediascan_files_path: String,
    pub minimum_filesize: u64,
    pub genre_mode: PolicyMode,
    pub media_exts: Vec<String>,
    pub art_exts: Vec<String>,
    pub lyrics_exts: Vec<String>,
    pub extra_exts: Vec<String>,
    pub filename_prohibited_chars: String,
    pub cover_name: String,
    pub libraries: Vec<LibraryConfig>,
}

impl Default for MediatestConfig {
    fn default() -> Self {
        let layout = LayoutRules::default();
        Self {
            version: CONFIG_VERSION,
            mediascan_files_path: "files.yaml".to_string(),
            minimum_filesize: 10 * KILOBYTE,
            genre_mode: PolicyMode::Whitelist,
            media_exts: to_strings(common::MEDIA_EXTS),
            art_exts: to_strings(common::ART_EXTS),
            lyrics_exts: to_strings(common::LYRICS_EXTS),
            extra_exts: to_strings(common::EXTRA_EXTS),
            filename_prohibited_chars: layout.prohibited_chars,
            cover_name: layout.cover_name,
            libraries: vec![
                LibraryConfig {
                    name: "LIB1".to_string(),
                    media_path: "/data/Music/".to_string(),
                    expected_media_count: 11159,
                    expected_lrc_count: 7207,
                    total_filesize_limit_gb: 100,
                    expected_filesize_gb: 84,
                    genres: to_strings(PRIMARY_GENRES),
                },
                LibraryConfig {
                    name: "LIB2".to_string(),
                    media_path: "/data/MusicOther/".to_string(),
                    expected_media_count: 9255,
                    expected_lrc_count: 4239,
                    total_filesize_limit_gb: 100,
                    expected_filesize_gb: 73,
                    genres: to_strings(SECONDARY_GENRES),
                },
            ],
        }
    }
}

impl MediatestConfig {
    pub fn partition(&self) -> Partition {
        let libraries = self.libraries.iter().map(LibraryConfig::to_library).collect();
        Partition::new(libraries, self.genre_mode)
    }

    pub fn layout_rules(&self) -> LayoutRules {
        let allowed_exts = [
            &self.media_exts,
            &self.art_exts,
            &self.lyrics_exts,
            &self.extra_exts,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
        LayoutRules {
            media_exts: self.media_exts.clone(),
            allowed_exts,
            prohibited_chars: self.filename_prohibited_chars.clone(),
            cover_name: self.cover_name.clone(),
        }
    }

    pub fn tag_rules(&self) -> TagRules {
        TagRules {
            minimum_filesize: self.minimum_filesize,
            ..TagRules::default()
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "io error: {}", err),
            ConfigError::Yaml(err) => write!(f, "yaml error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

pub fn config_path_from_env() -> PathBuf {
    match env::var("MEDIATEST_CONFIG") {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => default_config_path(),
    }
}

fn default_config_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join("mediatest.yaml"))
            .unwrap_or_else(|| PathBuf::from("mediatest.yaml")),
        Err(_) => PathBuf::from("mediatest.yaml"),
    }
}

pub fn load_or_create_config(path: &Path) -> Result<(MediatestConfig, bool), ConfigError> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let mut config: MediatestConfig = serde_yaml::from_str(&contents)?;
        if config.version < CONFIG_VERSION {
            config.version = CONFIG_VERSION;
        }
        if config.mediascan_files_path.trim().is_empty() {
            config.mediascan_files_path = "files.yaml".to_string();
        }
        if config.cover_name.trim().is_empty() {
            config.cover_name = "cover.jpg".to_string();
        }
        return Ok((config, false));
    }

    let config = MediatestConfig::default();
    save_config(path, &config)?;
    Ok((config, true))
}

pub fn save_config(path: &Path, config: &MediatestConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let contents = serde_yaml::to_string(config)?;
    fs::write(path, contents)?;
    Ok(())
}

pub fn load_media_files(path: &Path) -> Result<MediaFiles, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

pub fn resolve_path(config_path: &Path, value: &str) -> PathBuf {
    let raw = PathBuf::from(value);
    if raw.is_absolute() {
        return raw;
    }
    let base = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    base.join(raw)
}
