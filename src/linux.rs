use std::fs;

use crate::converter::Rasterizer;
use crate::error::{IconError, Result};
use crate::layout::Layout;
use crate::helpers::render_sizes;
use crate::logger::log_line;
use crate::models::{EmitReport, LINUX_SIZES};

/// Size copied to the top-level icon used by the .desktop file.
pub const MAIN_ICON_SIZE: u32 = 256;

pub fn emit_linux(layout: &Layout, rasterizer: &dyn Rasterizer) -> Result<EmitReport> {
    let svg = layout.source_svg();
    let icons_dir = layout.linux_icons_dir();
    fs::create_dir_all(&icons_dir)
        .map_err(|e| IconError::io(format!("creating {}", icons_dir.display()), e))?;

    println!("Generating {} Linux icon sizes...\n", LINUX_SIZES.len());
    let mut report = EmitReport::new("linux");
    render_sizes(&mut report, &LINUX_SIZES, rasterizer, &svg, |s| layout.linux_icon(s))?;

    let main_src = layout.linux_icon(MAIN_ICON_SIZE);
    let main_dst = layout.linux_main_icon();
    if report.produced.contains(&MAIN_ICON_SIZE) {
        fs::copy(&main_src, &main_dst)
            .map_err(|e| IconError::io(format!("copying {}", main_src.display()), e))?;
        println!("\n  Copied main icon to {}", main_dst.display());
    } else {
        log_line(&format!("no {}px icon, skipped {}", MAIN_ICON_SIZE, main_dst.display()));
    }

    let svg_dst = layout.linux_svg_copy();
    fs::copy(&svg, &svg_dst).map_err(|e| IconError::io(format!("copying {}", svg.display()), e))?;
    println!("  Copied SVG to {}", svg_dst.display());

    println!(
        "Generated {}/{} PNG icons in {}",
        report.succeeded(),
        report.attempted,
        icons_dir.display()
    );
    log_line(&format!("linux: {}/{} icons", report.succeeded(), report.attempted));
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::verify_dimensions;
    use crate::test_support::{project_with_source, FakeRasterizer, SAMPLE_SVG};

    #[test]
    fn test_emits_every_size_and_copies() {
        let (_dir, layout) = project_with_source();
        let fake = FakeRasterizer::default();
        let report = emit_linux(&layout, &fake).unwrap();

        assert_eq!(report.attempted, LINUX_SIZES.len());
        assert_eq!(report.produced, LINUX_SIZES.to_vec());
        assert_eq!(*fake.calls.borrow(), LINUX_SIZES.to_vec());
        for size in LINUX_SIZES {
            verify_dimensions(&layout.linux_icon(size), size).unwrap();
        }
        verify_dimensions(&layout.linux_main_icon(), 256).unwrap();
        assert_eq!(fs::read_to_string(layout.linux_svg_copy()).unwrap(), SAMPLE_SVG);
    }

    #[test]
    fn test_failed_size_is_skipped() {
        let (_dir, layout) = project_with_source();
        let fake = FakeRasterizer::failing(&[24, 512]);
        let report = emit_linux(&layout, &fake).unwrap();

        assert_eq!(report.attempted, 8);
        assert_eq!(report.succeeded(), 6);
        assert!(!layout.linux_icon(24).exists());
        assert!(layout.linux_icon(32).exists());
        assert!(layout.linux_main_icon().exists());
    }

    #[test]
    fn test_main_icon_needs_256() {
        let (_dir, layout) = project_with_source();
        let report = emit_linux(&layout, &FakeRasterizer::failing(&[256])).unwrap();
        assert_eq!(report.succeeded(), 7);
        assert!(!layout.linux_main_icon().exists());
        assert!(layout.linux_svg_copy().exists());
    }

    #[test]
    fn test_misshapen_256_is_not_promoted() {
        let (_dir, layout) = project_with_source();
        let fake = FakeRasterizer { misshapen_sizes: vec![256], ..FakeRasterizer::default() };
        let report = emit_linux(&layout, &fake).unwrap();
        assert_eq!(report.succeeded(), 7);
        assert!(!report.produced.contains(&256));
        assert!(!layout.linux_main_icon().exists());
    }

    #[test]
    fn test_stale_256_from_earlier_run_is_not_promoted() {
        let (_dir, layout) = project_with_source();
        emit_linux(&layout, &FakeRasterizer::default()).unwrap();
        fs::remove_file(layout.linux_main_icon()).unwrap();

        emit_linux(&layout, &FakeRasterizer::failing(&[256])).unwrap();
        assert!(layout.linux_icon(256).exists());
        assert!(!layout.linux_main_icon().exists());
    }
}
