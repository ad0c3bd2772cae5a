use std::fs;
use std::path::Path;

use crate::converter::Rasterizer;
use crate::error::{IconError, Result};
use crate::helpers::render_sizes;
use crate::layout::{macos_icon_file_name, Layout};
use crate::logger::log_line;
use crate::models::{EmitReport, Manifest, ManifestImage, ManifestInfo, MACOS_SIZES};

/// Largest logical size that gets a 1x entry.
pub const MAX_LOGICAL_SIZE: u32 = 512;

fn entry(logical: u32, pixels: u32, scale: &str) -> ManifestImage {
    ManifestImage {
        size: format!("{}x{}", logical, logical),
        idiom: "mac".to_string(),
        filename: macos_icon_file_name(pixels),
        scale: scale.to_string(),
    }
}

/// Manifest for the sizes actually produced: a 1x entry per size up to 512,
/// followed by a 2x entry when the double-sized file exists too.
pub fn build_manifest(produced: &[u32]) -> Manifest {
    let mut sizes = produced.to_vec();
    sizes.sort_unstable();
    sizes.dedup();

    let mut images = Vec::new();
    for &size in sizes.iter().filter(|s| **s <= MAX_LOGICAL_SIZE) {
        images.push(entry(size, size, "1x"));
        if sizes.binary_search(&(size * 2)).is_ok() {
            images.push(entry(size, size * 2, "2x"));
        }
    }
    Manifest { images, info: ManifestInfo::default() }
}

pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| IconError::io(format!("writing {}", path.display()), e))
}

pub fn emit_macos(layout: &Layout, rasterizer: &dyn Rasterizer) -> Result<EmitReport> {
    let svg = layout.source_svg();
    let iconset = layout.appiconset_dir();
    fs::create_dir_all(&iconset)
        .map_err(|e| IconError::io(format!("creating {}", iconset.display()), e))?;

    println!("Generating {} macOS icon sizes...\n", MACOS_SIZES.len());
    let mut report = EmitReport::new("macos");
    render_sizes(&mut report, &MACOS_SIZES, rasterizer, &svg, |s| layout.macos_icon(s))?;

    let manifest = build_manifest(&report.produced);
    let manifest_path = layout.manifest_path();
    write_manifest(&manifest_path, &manifest)?;
    println!("\n  Wrote {} ({} entries)", manifest_path.display(), manifest.images.len());

    println!(
        "Generated {}/{} PNG icons in {}",
        report.succeeded(),
        report.attempted,
        iconset.display()
    );
    log_line(&format!("macos: {}/{} icons", report.succeeded(), report.attempted));
    Ok(report)
}
