use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

/// Pixel dimensions the icon is rendered at.
pub const ICON_SIZES: [u32; 2] = [192, 512];

/// Renders `public/icon.svg` into fixed-size PNGs by delegating to an
/// external conversion tool (ImageMagick).
pub struct IconConverter {
    /// Directory containing the `public` asset directory
    base: PathBuf,

    /// Conversion program to invoke
    program: String,

    /// Surface launch failures and nonzero exit codes instead of assuming
    /// the conversion succeeded
    strict: bool,
}

impl IconConverter {
    /// Locate the asset directory relative to the running executable, one
    /// level above its own directory.
    pub fn new(strict: bool) -> Result<Self> {
        let exe = std::env::current_exe().context("Failed to resolve the executable path")?;
        let dir = exe
            .parent()
            .context("Executable path has no parent directory")?;

        Ok(Self::with_base(dir.join(".."), strict))
    }

    pub fn with_base(base: impl Into<PathBuf>, strict: bool) -> Self {
        Self {
            base: base.into(),
            program: String::from("magick"),
            strict,
        }
    }

    /// Override the conversion program (used by tests).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn source_path(&self) -> PathBuf {
        self.base.join("public").join("icon.svg")
    }

    pub fn output_path(&self, size: u32) -> PathBuf {
        self.base.join("public").join(format!("icon-{size}.png"))
    }

    /// Render the source asset at every target size, in order.
    pub fn run(&self) -> Result<()> {
        for size in ICON_SIZES {
            self.rasterize(size)?;
        }
        Ok(())
    }

    fn rasterize(&self, size: u32) -> Result<()> {
        let source = self.source_path();
        let dest = self.output_path(size);

        info!(size, dest = %dest.display(), "Rendering icon");
        let status = Command::new(&self.program)
            .arg("convert")
            .arg(&source)
            .arg("-resize")
            .arg(format!("{size}x{size}"))
            .arg(&dest)
            .status();

        if !self.strict {
            // Compatibility with the original script: neither a launch
            // failure nor the tool's exit status is surfaced.
            if let Err(error) = status {
                debug!(?error, "Failed to launch {}", self.program);
            }
            return Ok(());
        }

        match status
            .with_context(|| format!("Failed to launch {}", self.program))?
            .code()
        {
            Some(0) => Ok(()),
            Some(code) => bail!("{} failed with error code: {}", self.program, code),
            None => bail!("{} was terminated by a signal", self.program),
        }
    }
}
