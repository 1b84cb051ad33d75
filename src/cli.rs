//! Command-line interface implementation

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::catalog::{Catalog, CatalogError};
use crate::encoder::{PngSpriteEncoder, SpriteEncoder};
use crate::generator::{GenerateError, Generator, GeneratorOptions, DEFAULT_OUT_DIR};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Generate placeholder 32x32 PNG sprites for the farm game
///
/// Running with no arguments writes the sixteen built-in sprites into the
/// current directory. Every flag is optional and only narrows or redirects
/// that run.
#[derive(Parser, Debug)]
#[command(name = "farm-sprites")]
#[command(about = "Generate placeholder 32x32 PNG sprites for the farm game")]
#[command(version)]
pub struct Cli {
    /// Directory to write sprites into (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// TOML catalog to use instead of the built-in sprite table
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Only generate the catalog entry with this file name (repeatable)
    #[arg(long, value_name = "FILE")]
    pub only: Vec<String>,

    /// Scale output by integer factor (1-16, default: 1)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub scale: u8,

    /// Print the catalog and exit without writing anything
    #[arg(long)]
    pub list: bool,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    run_generate(&cli)
}

/// Execute a generator run described by `cli`
pub fn run_generate(cli: &Cli) -> ExitCode {
    let code =
        run_with_encoder(cli, PngSpriteEncoder, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}

/// Execute a generator run with `encoder`, writing progress to `out` and
/// diagnostics to `err`. Returns the process exit code.
pub fn run_with_encoder<E, W, V>(cli: &Cli, encoder: E, out: &mut W, err: &mut V) -> u8
where
    E: SpriteEncoder,
    W: Write,
    V: Write,
{
    let catalog = match load_catalog(cli) {
        Ok(catalog) => catalog,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            return EXIT_INVALID_ARGS;
        }
    };

    if cli.list {
        return match print_catalog(&catalog, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "Error: {}", e);
                EXIT_ERROR
            }
        };
    }

    let options = GeneratorOptions { out_dir: cli.out_dir.clone(), scale: cli.scale };
    let generator = Generator::new(encoder, options);

    match generator.run(&catalog, out) {
        Ok(_) => EXIT_SUCCESS,
        Err(GenerateError::Preflight(e)) => {
            let _ = writeln!(err, "Error: {}", e);
            if let Some(hint) = e.hint() {
                let _ = writeln!(err, "{}", hint);
            }
            EXIT_ERROR
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Resolve the catalog from `--catalog` and narrow it with `--only`
fn load_catalog(cli: &Cli) -> Result<Catalog, CatalogError> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    if cli.only.is_empty() {
        Ok(catalog)
    } else {
        catalog.select(cli.only.as_slice())
    }
}

/// One line per entry: file, pattern, color
fn print_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    let width = catalog.entries().iter().map(|e| e.file.len()).max().unwrap_or(0);
    for sprite in catalog {
        writeln!(
            out,
            "{:<width$}  {:<13}  {}",
            sprite.file,
            sprite.pattern,
            sprite.color,
            width = width
        )?;
    }
    Ok(())
}
