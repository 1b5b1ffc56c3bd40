//! Scan configuration.
//!
//! Turns raw command-line values into an immutable [`ScanConfig`]. Every
//! failure here is a configuration error and aborts before any scan work.

use anyhow::{Context, Result};
use renderer::{BuiltinPalette, Palette, PaletteDefinition};
use scan_assembler::FilePattern;
use scan_common::{ScanError, ScanGeometry};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where the rendered image goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` and `-` both mean standard output.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => OutputTarget::File(p.to_path_buf()),
            _ => OutputTarget::Stdout,
        }
    }

    /// Open the sink. Files are created or truncated.
    pub fn open(&self) -> Result<BufWriter<Box<dyn Write>>> {
        let sink: Box<dyn Write> = match self {
            OutputTarget::Stdout => Box::new(io::stdout().lock()),
            OutputTarget::File(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Cannot open output {}", path.display()))?,
            ),
        };
        Ok(BufWriter::new(sink))
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub pattern: FilePattern,
    pub geometry: ScanGeometry,
    pub palette: Palette,
}

impl ScanConfig {
    /// Validate raw values.
    ///
    /// `color` is a palette index or name; `palette_file` takes precedence
    /// over it when given.
    pub fn new(
        pattern: &str,
        width: usize,
        height: usize,
        shift: i64,
        color: &str,
        palette_file: Option<&Path>,
    ) -> Result<Self> {
        let palette = resolve_palette(color, palette_file)?;

        let shift = usize::try_from(shift).map_err(|_| {
            ScanError::InvalidConfig(format!("row shift must be non-negative, got {}", shift))
        })?;

        let pattern = FilePattern::parse(pattern).context("Bad sample file pattern")?;
        let geometry = ScanGeometry::new(width, height, shift).context("Bad scan geometry")?;

        debug!(
            pattern = pattern.as_str(),
            palette = palette.name(),
            "Configuration validated"
        );

        Ok(Self {
            pattern,
            geometry,
            palette,
        })
    }
}

fn resolve_palette(color: &str, palette_file: Option<&Path>) -> Result<Palette> {
    // The color selector is validated even when a palette file overrides it
    let builtin: BuiltinPalette = color.parse()?;

    match palette_file {
        Some(path) => {
            let definition = PaletteDefinition::from_file(path)
                .with_context(|| format!("Cannot load palette file {}", path.display()))?;
            let palette = definition
                .to_palette()
                .with_context(|| format!("Bad palette file {}", path.display()))?;
            info!(palette = palette.name(), "Using custom palette");
            Ok(palette)
        }
        None => Ok(builtin.palette()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_arg() {
        assert_eq!(OutputTarget::from_arg(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("-"))),
            OutputTarget::Stdout
        );
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("out.pnm"))),
            OutputTarget::File(PathBuf::from("out.pnm"))
        );
    }

    #[test]
    fn test_valid_config() {
        let config = ScanConfig::new("s_%d_%d.dmp", 207, 80, 10, "3", None).unwrap();
        assert_eq!(config.geometry.image_height(), 90);
        assert_eq!(config.palette.name(), "inferno");
    }

    #[test]
    fn test_color_by_name() {
        let config = ScanConfig::new("s_%d_%d.dmp", 2, 2, 0, "viridis", None).unwrap();
        assert_eq!(config.palette.name(), "viridis");
    }

    #[test]
    fn test_negative_shift_rejected() {
        let err = ScanConfig::new("s_%d_%d.dmp", 2, 2, -1, "1", None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScanError>(),
            Some(ScanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_color_rejected() {
        assert!(ScanConfig::new("s_%d_%d.dmp", 2, 2, 0, "5", None).is_err());
        assert!(ScanConfig::new("s_%d_%d.dmp", 2, 2, 0, "-1", None).is_err());
        assert!(ScanConfig::new("s_%d_%d.dmp", 2, 2, 0, "rainbow", None).is_err());
    }

    #[test]
    fn test_bad_pattern_rejected() {
        assert!(ScanConfig::new("s_%d.dmp", 2, 2, 0, "1", None).is_err());
        assert!(ScanConfig::new("s_%d_%d_%d.dmp", 2, 2, 0, "1", None).is_err());
    }

    #[test]
    fn test_missing_palette_file_rejected() {
        let result = ScanConfig::new(
            "s_%d_%d.dmp",
            2,
            2,
            0,
            "1",
            Some(Path::new("/nonexistent/palette.json")),
        );
        assert!(result.is_err());
    }
}
