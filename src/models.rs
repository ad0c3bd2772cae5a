use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IconError;

/// Pixel sizes for the hicolor theme on Linux desktops.
pub const LINUX_SIZES: [u32; 8] = [16, 24, 32, 48, 64, 128, 256, 512];
/// Pixel sizes for the macOS app icon set.
pub const MACOS_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// External SVG rasterizers, in probe priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Converter {
    RsvgConvert,
    Inkscape,
    Magick,
    #[value(name = "convert")]
    ImageMagickConvert,
}

impl Converter {
    pub const ALL: [Converter; 4] = [
        Converter::RsvgConvert,
        Converter::Inkscape,
        Converter::Magick,
        Converter::ImageMagickConvert,
    ];

    pub fn program(&self) -> &'static str {
        match self {
            Converter::RsvgConvert => "rsvg-convert",
            Converter::Inkscape => "inkscape",
            Converter::Magick => "magick",
            Converter::ImageMagickConvert => "convert",
        }
    }

    /// Arguments of the version check used to probe for the tool.
    pub fn version_args(&self) -> &'static [&'static str] {
        match self {
            Converter::RsvgConvert | Converter::Inkscape => &["--version"],
            // ImageMagick only understands the single-dash form
            Converter::Magick | Converter::ImageMagickConvert => &["-version"],
        }
    }
}

impl fmt::Display for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for Converter {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rsvg-convert" | "rsvg" => Ok(Converter::RsvgConvert),
            "inkscape" => Ok(Converter::Inkscape),
            "magick" => Ok(Converter::Magick),
            "convert" | "imagemagick" => Ok(Converter::ImageMagickConvert),
            other => Err(IconError::Config(format!("unknown converter '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlatformSelection {
    Linux,
    #[value(alias = "mac")]
    Macos,
    #[default]
    All,
}

impl PlatformSelection {
    pub fn includes_linux(&self) -> bool { matches!(self, PlatformSelection::Linux | PlatformSelection::All) }
    pub fn includes_macos(&self) -> bool { matches!(self, PlatformSelection::Macos | PlatformSelection::All) }
}

impl FromStr for PlatformSelection {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(PlatformSelection::Linux),
            "macos" | "mac" => Ok(PlatformSelection::Macos),
            "all" | "" => Ok(PlatformSelection::All),
            other => Err(IconError::Config(format!("unknown platform '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub name: String,            // basename of assets/icons/<name>.svg
    pub converter: Option<Converter>,
    pub linux_dir: String,       // relative to project root
    pub macos_dir: String,       // relative to project root
    pub platform: PlatformSelection,
    pub log_file: String,        // empty => default data dir
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "aks".to_string(),
            converter: None,
            linux_dir: "linux".to_string(),
            macos_dir: "macos".to_string(),
            platform: PlatformSelection::All,
            log_file: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub size: String,
    pub idiom: String,
    pub filename: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self { version: 1, author: "xcode".to_string() }
    }
}

/// Contents.json of an Xcode `.appiconset`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub platform: &'static str,
    pub attempted: usize,
    pub produced: Vec<u32>,
}

impl EmitReport {
    pub fn new(platform: &'static str) -> Self {
        Self { platform, attempted: 0, produced: Vec::new() }
    }

    pub fn succeeded(&self) -> usize { self.produced.len() }
}
