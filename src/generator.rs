//! Catalog runner: render, encode and write every sprite in a catalog

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::{Catalog, SpriteDescriptor};
use crate::encoder::{EncodeError, SpriteEncoder};
use crate::output::{scale_canvas, write_sprite, OutputError};
use crate::renderer::render;

/// Where generated sprites land when no directory is given.
pub const DEFAULT_OUT_DIR: &str = ".";

/// Error type for a generator run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The preflight check found the encoder unusable
    #[error(transparent)]
    Preflight(EncodeError),
    /// Encoding a particular sprite failed
    #[error("Failed to encode '{file}': {source}")]
    Encode {
        file: String,
        #[source]
        source: EncodeError,
    },
    #[error(transparent)]
    Output(#[from] OutputError),
    /// Progress output could not be written
    #[error("Failed to write progress: {0}")]
    Console(#[from] io::Error),
}

/// Knobs for a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Directory sprite files are written into
    pub out_dir: PathBuf,
    /// Integer nearest-neighbor upscale applied before encoding (1 = none)
    pub scale: u8,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR), scale: 1 }
    }
}

/// Renders catalog entries and writes them through a [`SpriteEncoder`].
#[derive(Debug, Clone)]
pub struct Generator<E> {
    encoder: E,
    options: GeneratorOptions,
}

impl<E: SpriteEncoder> Generator<E> {
    pub fn new(encoder: E, options: GeneratorOptions) -> Self {
        Self { encoder, options }
    }

    /// Verify the encoder works before anything is rendered or written.
    pub fn preflight(&self) -> Result<(), GenerateError> {
        self.encoder.probe().map_err(GenerateError::Preflight)
    }

    /// Output path for a catalog entry.
    pub fn sprite_path(&self, sprite: &SpriteDescriptor) -> PathBuf {
        self.options.out_dir.join(&sprite.file)
    }

    /// Render, encode and write one sprite. Returns the path written.
    pub fn generate_one(&self, sprite: &SpriteDescriptor) -> Result<PathBuf, GenerateError> {
        let canvas = scale_canvas(render(sprite.color, sprite.pattern), self.options.scale);
        let bytes = self
            .encoder
            .encode(&canvas)
            .map_err(|source| GenerateError::Encode { file: sprite.file.clone(), source })?;

        let path = self.sprite_path(sprite);
        write_sprite(&bytes, &path)?;
        Ok(path)
    }

    /// Generate every sprite in `catalog`, in order, reporting progress to `out`.
    ///
    /// Runs the preflight check first; if it fails nothing is written. The first
    /// failing sprite aborts the run, leaving earlier files in place.
    ///
    /// Returns the number of sprites written.
    pub fn run<W: Write>(&self, catalog: &Catalog, out: &mut W) -> Result<usize, GenerateError> {
        self.preflight()?;

        writeln!(out, "Generating example sprites...")?;
        let mut written = 0;
        for sprite in catalog {
            self.generate_one(sprite)?;
            writeln!(out, "  Created: {}", display_name(&self.options.out_dir, &sprite.file))?;
            written += 1;
        }

        writeln!(out)?;
        writeln!(out, "✓ Generated {} sprites!", written)?;
        writeln!(out, "Place these in farm-game/assets/ to use them in the game.")?;
        Ok(written)
    }
}

/// File name as shown in progress output: bare when writing to the default
/// directory, otherwise joined with the output directory.
fn display_name(out_dir: &Path, file: &str) -> String {
    if out_dir == Path::new(DEFAULT_OUT_DIR) {
        file.to_string()
    } else {
        out_dir.join(file).display().to_string()
    }
}
