mod config;
mod defaults;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use checks::{check_library_layout, run_tag_checks, CheckOutcome, ChecksError};
use clap::{Parser, Subcommand};
use config::{
    config_path_from_env, load_media_files, load_or_create_config, resolve_path, MediatestConfig,
};
use genres::GenreCatalog;
use library::{check_partition, GenreValidator, PartitionError};
use report::RunReport;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_OK: u8 = 0;
const EXIT_FAILED: u8 = 1;
const EXIT_CONFIG: u8 = 2;

#[derive(Parser)]
#[command(name = "mediatest", about = "Verify a music collection against its genre partition")]
struct Cli {
    /// Config file (defaults to MEDIATEST_CONFIG, then mediatest.yaml next to the binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run partition, genre, tag and filesystem checks
    Check {
        /// Scan document to validate instead of the configured one
        #[arg(long)]
        files: Option<PathBuf>,
        /// Skip the checks that walk the library roots
        #[arg(long)]
        skip_filesystem: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Only check that the configured libraries partition the genre catalog
    Partition,
    /// List every catalog genre with its label and library
    Genres,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!("{}", err);
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn run(cli: Cli) -> Result<u8, Box<dyn std::error::Error>> {
    let config_path = cli.config.unwrap_or_else(config_path_from_env);
    let (config, created) = load_or_create_config(&config_path)?;
    if created {
        info!("Created default config at {:?}", config_path);
    } else {
        info!("Loaded config from {:?}", config_path);
    }
    let catalog = GenreCatalog::builtin()?;

    match cli.command.unwrap_or(Command::Check {
        files: None,
        skip_filesystem: false,
        json: false,
    }) {
        Command::Check {
            files,
            skip_filesystem,
            json,
        } => {
            let files_path = files
                .unwrap_or_else(|| resolve_path(&config_path, &config.mediascan_files_path));
            run_checks(&config, catalog, &files_path, skip_filesystem, json)
        }
        Command::Partition => match check_partition(&catalog, &config.partition()) {
            Ok(()) => {
                println!(
                    "partition ok: {} genres across {} libraries",
                    catalog.len(),
                    config.libraries.len()
                );
                Ok(EXIT_OK)
            }
            Err(err) => Ok(partition_failed(&err)),
        },
        Command::Genres => {
            let partition = config.partition();
            for entry in catalog.entries() {
                let owner = partition
                    .libraries()
                    .iter()
                    .find(|library| library.genres.contains(&entry.id))
                    .map(|library| library.name.as_str())
                    .unwrap_or("-");
                println!("{}\t{}\t{}", entry.id, entry.label, owner);
            }
            Ok(EXIT_OK)
        }
    }
}

fn run_checks(
    config: &MediatestConfig,
    catalog: GenreCatalog,
    files_path: &Path,
    skip_filesystem: bool,
    json: bool,
) -> Result<u8, Box<dyn std::error::Error>> {
    let validator = match GenreValidator::new(catalog, config.partition()) {
        Ok(validator) => validator,
        Err(err) => return Ok(partition_failed(&err)),
    };
    let report = build_report(config, &validator, files_path, skip_filesystem)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    if report.is_clean() {
        info!("All checks passed");
        Ok(EXIT_OK)
    } else {
        warn!("{} failures", report.failure_count());
        Ok(EXIT_FAILED)
    }
}

/// Loads the scan document and runs every check that needs it or the library roots.
fn build_report(
    config: &MediatestConfig,
    validator: &GenreValidator,
    files_path: &Path,
    skip_filesystem: bool,
) -> Result<RunReport, Box<dyn std::error::Error>> {
    let media = load_media_files(files_path)?;
    info!(
        "Loaded {} files from {:?}, checking against {} genres",
        media.mediafiles.len(),
        files_path,
        validator.catalog().len()
    );

    let mut report = RunReport {
        genres: validator.validate_all(&media.mediafiles),
        checks: run_tag_checks(&media.mediafiles, &config.tag_rules()),
    };

    if skip_filesystem {
        info!("Skipping filesystem checks");
        return Ok(report);
    }

    let rules = config.layout_rules();
    for library in validator.partition().libraries() {
        let root = Path::new(&library.media_path);
        match check_library_layout(root, library, &rules) {
            Ok(outcomes) => report.checks.extend(outcomes),
            Err(ChecksError::MissingRoot(path)) => {
                warn!("{}: library root {:?} not found", library.name, path);
                let mut outcome = CheckOutcome::new("library root", library.media_path.as_str());
                outcome.fail(format!("library root not found: {}", path.display()));
                report.checks.push(outcome);
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(report)
}

fn partition_failed(err: &PartitionError) -> u8 {
    for violation in &err.violations {
        error!("{}", violation);
    }
    EXIT_CONFIG
}
