//! Fixture generator and verifier.
//!
//! ```sh
//! golden list
//! golden generate poly -o poly/poly.toml
//! golden verify --root tests/data
//! RUST_LOG=debug golden verify step
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use golden_interp::fixture::{verify, Suite};
use golden_interp::FixtureError;

#[derive(Parser)]
#[command(name = "golden")]
#[command(about = "Golden reference fixtures for interpolation tests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one suite.
    Generate {
        /// Suite name (see `golden list`).
        suite: Suite,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Regenerate suites and diff them against the committed fixtures.
    Verify {
        /// Directory holding the committed fixtures.
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Suites to check; all when omitted.
        suites: Vec<Suite>,
    },
    /// List suites and their fixture paths.
    List,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { suite, output } => {
            let text = suite.generate()?;
            match output {
                Some(path) => write_fixture(&path, &text)?,
                None => print!("{text}"),
            }
            Ok(())
        }
        Commands::Verify { root, suites } => {
            let suites = if suites.is_empty() { Suite::ALL.to_vec() } else { suites };
            for suite in suites {
                verify_suite(&root, suite)?;
            }
            Ok(())
        }
        Commands::List => {
            for suite in Suite::ALL {
                println!("{:<12} {}", suite.name(), suite.default_path());
            }
            Ok(())
        }
    }
}

fn write_fixture(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}

fn verify_suite(root: &Path, suite: Suite) -> anyhow::Result<()> {
    let path = root.join(suite.default_path());
    println!("golden generate {suite}");
    println!("diff {} -", path.display());

    let committed = fs::read_to_string(&path)
        .with_context(|| format!("failed to read committed fixture {}", path.display()))?;
    match verify(suite, &committed) {
        Ok(()) => Ok(()),
        Err(FixtureError::Mismatch { diff, .. }) => {
            eprint!("{diff}");
            bail!("suite '{suite}' does not match {}", path.display())
        }
        Err(e) => Err(e).with_context(|| format!("failed to generate suite '{suite}'")),
    }
}
