use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{IconError, Result};
use crate::logger::{log_command, log_error, log_line};
use crate::models::Converter;

/// Turns the source SVG into a square PNG of the requested size.
pub trait Rasterizer {
    fn name(&self) -> String;
    fn rasterize(&self, svg: &Path, png: &Path, size: u32) -> Result<()>;
}

/// Runs the version check of `converter`; spawn errors count as "not installed".
pub fn probe_installed(converter: Converter) -> bool {
    let program = converter.program();
    let ok = Command::new(program)
        .args(converter.version_args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    log_line(&format!("probe {} -> {}", program, if ok { "ok" } else { "unavailable" }));
    ok
}

/// First candidate whose probe succeeds, in the order given.
pub fn detect_converter_with<F>(candidates: &[Converter], mut probe: F) -> Option<Converter>
where
    F: FnMut(Converter) -> bool,
{
    candidates.iter().copied().find(|c| probe(*c))
}

/// With a preferred tool only that tool is probed.
pub fn detect_preferred_with<F>(preferred: Option<Converter>, probe: F) -> Option<Converter>
where
    F: FnMut(Converter) -> bool,
{
    match preferred {
        Some(c) => detect_converter_with(&[c], probe),
        None => detect_converter_with(&Converter::ALL, probe),
    }
}

pub fn detect_converter(preferred: Option<Converter>) -> Option<Converter> {
    detect_preferred_with(preferred, probe_installed)
}

pub fn build_args(converter: Converter, svg: &Path, png: &Path, size: u32) -> Vec<String> {
    let svg = svg.display().to_string();
    let png = png.display().to_string();
    let s = size.to_string();
    let geometry = format!("{}x{}", size, size);
    match converter {
        Converter::RsvgConvert => vec![
            "-w".into(), s.clone(),
            "-h".into(), s,
            svg,
            "-o".into(), png,
        ],
        Converter::Inkscape => vec![
            svg,
            "--export-type=png".into(),
            format!("--export-filename={}", png),
            format!("--export-width={}", s),
            format!("--export-height={}", s),
        ],
        // Same argument convention for IM7 `magick` and IM6 `convert`
        Converter::Magick | Converter::ImageMagickConvert => vec![
            "-density".into(), "300".into(),
            "-background".into(), "none".into(),
            svg,
            "-resize".into(), geometry.clone(),
            "-gravity".into(), "center".into(),
            "-extent".into(), geometry,
            png,
        ],
    }
}

/// Fails unless `png` decodes to exactly `size`x`size` pixels.
pub fn verify_dimensions(png: &Path, size: u32) -> Result<()> {
    let (width, height) = image::image_dimensions(png).map_err(|e| IconError::Conversion {
        size,
        tool: "image".to_string(),
        detail: format!("unreadable output {}: {}", png.display(), e),
    })?;
    if width != size || height != size {
        return Err(IconError::WrongDimensions { size, width, height });
    }
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| IconError::io(format!("creating {}", parent.display()), e))?;
    }
    Ok(())
}

fn remove_output(png: &Path) {
    if let Err(e) = fs::remove_file(png) {
        if e.kind() != io::ErrorKind::NotFound {
            log_error(&format!("removing {}", png.display()), &e);
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExternalConverter {
    pub converter: Converter,
    program: String,
    leading_args: Vec<String>,
}

impl ExternalConverter {
    pub fn new(converter: Converter) -> Self {
        Self { converter, program: converter.program().to_string(), leading_args: Vec::new() }
    }

    /// Runs `program leading_args.. <tool args>` instead of the tool on PATH.
    pub fn with_program(mut self, program: impl Into<String>, leading_args: Vec<String>) -> Self {
        self.program = program.into();
        self.leading_args = leading_args;
        self
    }
}

impl Rasterizer for ExternalConverter {
    fn name(&self) -> String {
        self.converter.program().to_string()
    }

    fn rasterize(&self, svg: &Path, png: &Path, size: u32) -> Result<()> {
        if size == 0 {
            return Err(IconError::InvalidSize);
        }
        ensure_parent_dir(png)?;

        let program = self.program.as_str();
        let mut args = self.leading_args.clone();
        args.extend(build_args(self.converter, svg, png, size));
        log_command(program, &args);
        let output = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| IconError::Conversion {
                size,
                tool: program.to_string(),
                detail: format!("could not run: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() { output.status.to_string() } else { stderr };
            return Err(IconError::Conversion { size, tool: program.to_string(), detail });
        }
        // A mis-sized file must not be picked up as a finished icon
        verify_dimensions(png, size).inspect_err(|_| remove_output(png))
    }
}
