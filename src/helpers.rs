use std::io::Write;
use std::path::{Path, PathBuf};

use crate::converter::Rasterizer;
use crate::error::Result;
use crate::logger::log_error;
use crate::models::EmitReport;

/// Renders one PNG per size into `target(size)`. Per-size failures are
/// printed and skipped, fatal errors stop the loop.
pub fn render_sizes(
    report: &mut EmitReport,
    sizes: &[u32],
    rasterizer: &dyn Rasterizer,
    svg: &Path,
    target: impl Fn(u32) -> PathBuf,
) -> Result<()> {
    for &size in sizes {
        report.attempted += 1;
        let png = target(size);
        print!("  Creating {}x{} icon... ", size, size);
        let _ = std::io::stdout().flush();
        match rasterizer.rasterize(svg, &png, size) {
            Ok(()) => {
                println!("✅");
                report.produced.push(size);
            }
            Err(e) if !e.is_fatal() => {
                println!("❌");
                eprintln!("    Error converting SVG at size {}: {}", size, e);
                log_error(&format!("{} {}px", report.platform, size), &e);
            }
            Err(e) => {
                println!("❌");
                return Err(e);
            }
        }
    }
    Ok(())
}

/// "linux: 8/8" style summary line.
pub fn format_tally(report: &EmitReport) -> String {
    format!("{}: {}/{}", report.platform, report.succeeded(), report.attempted)
}
