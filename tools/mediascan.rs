use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use common::{is_media_file, relpath_from, MediaFiles};
use metadata::read_media_file;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "mediascan")]
#[command(about = "Read the tags of every track under the library roots into a scan document")]
struct Args {
    /// Library roots to walk
    #[arg(required = true)]
    roots: Vec<PathBuf>,

    /// Where to write the scan document
    #[arg(short, long, default_value = "files.yaml")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let mut document = MediaFiles::default();
    let mut unreadable = 0usize;
    for root in &args.roots {
        let before = document.mediafiles.len();
        unreadable += scan_root(root, &mut document);
        info!(
            "Scanned {:?}: {} tracks",
            root,
            document.mediafiles.len() - before
        );
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.output, serde_yaml::to_string(&document)?)?;
    info!(
        "Wrote {} tracks to {:?} ({} unreadable)",
        document.mediafiles.len(),
        args.output,
        unreadable
    );
    Ok(())
}

/// Appends every readable track under `root`; returns how many could not be read.
fn scan_root(root: &Path, document: &mut MediaFiles) -> usize {
    let mut unreadable = 0;
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Walk error under {:?}: {}", root, err);
                unreadable += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_media_file(entry.path()) {
            continue;
        }
        match read_media_file(entry.path()) {
            Ok(file) => document.mediafiles.push(file),
            Err(err) => {
                let rel = relpath_from(root, entry.path())
                    .unwrap_or_else(|| entry.path().display().to_string());
                warn!("Skipping {}: {}", rel, err);
                unreadable += 1;
            }
        }
    }
    unreadable
}
