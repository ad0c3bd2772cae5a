use crate::converter::{detect_converter, ExternalConverter, Rasterizer};
use crate::error::{IconError, Result};
use crate::helpers::format_tally;
use crate::layout::Layout;
use crate::linux::emit_linux;
use crate::logger::log_line;
use crate::macos::emit_macos;
use crate::models::{Converter, EmitReport, PlatformSelection};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub converter: String,
    pub reports: Vec<EmitReport>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize { self.reports.iter().map(EmitReport::succeeded).sum() }
    pub fn attempted(&self) -> usize { self.reports.iter().map(|r| r.attempted).sum() }
}

/// Probes for a converter and runs the requested emitters.
pub fn run(layout: &Layout, platforms: PlatformSelection, preferred: Option<Converter>) -> Result<RunSummary> {
    run_selecting(layout, platforms, || detect_converter(preferred), ExternalConverter::new)
}

/// Source and converter checks happen before anything is written.
pub fn run_selecting<D, M, R>(layout: &Layout, platforms: PlatformSelection, detect: D, make: M) -> Result<RunSummary>
where
    D: FnOnce() -> Option<Converter>,
    M: FnOnce(Converter) -> R,
    R: Rasterizer,
{
    let svg = layout.source_svg();
    if !svg.is_file() {
        return Err(IconError::MissingSource(svg));
    }
    let converter = detect().ok_or(IconError::NoConverter)?;
    let rasterizer = make(converter);
    println!("Using {} to generate icons...", rasterizer.name());
    log_line(&format!("source={} converter={}", svg.display(), rasterizer.name()));

    let mut reports = Vec::new();
    if platforms.includes_linux() {
        reports.push(emit_linux(layout, &rasterizer)?);
    }
    if platforms.includes_macos() {
        reports.push(emit_macos(layout, &rasterizer)?);
    }

    let summary = RunSummary { converter: rasterizer.name(), reports };
    let tallies: Vec<String> = summary.reports.iter().map(format_tally).collect();
    log_line(&format!("done: {}", tallies.join(", ")));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LINUX_SIZES, MACOS_SIZES};
    use crate::test_support::{project_with_source, FakeRasterizer};
    use std::fs;
    use std::path::Path;

    fn file_count(dir: &Path) -> usize {
        let mut n = 0;
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            n += if path.is_dir() { file_count(&path) } else { 1 };
        }
        n
    }

    fn snapshot(layout: &Layout) -> Vec<(String, Vec<u8>)> {
        let mut files = Vec::new();
        for size in LINUX_SIZES {
            let p = layout.linux_icon(size);
            files.push((p.display().to_string(), fs::read(&p).unwrap()));
        }
        for size in MACOS_SIZES {
            let p = layout.macos_icon(size);
            files.push((p.display().to_string(), fs::read(&p).unwrap()));
        }
        let m = layout.manifest_path();
        files.push((m.display().to_string(), fs::read(&m).unwrap()));
        files
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path(), &Default::default());
        let err = run_selecting(&layout, PlatformSelection::All, || Some(Converter::RsvgConvert), |_| {
            FakeRasterizer::default()
        })
        .unwrap_err();
        assert!(matches!(err, IconError::MissingSource(_)));
        assert!(err.is_fatal());
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_no_converter_writes_nothing() {
        let (dir, layout) = project_with_source();
        let err = run_selecting(&layout, PlatformSelection::All, || None, |_| FakeRasterizer::default())
            .unwrap_err();
        assert!(matches!(err, IconError::NoConverter));
        assert!(!layout.linux_dir.exists());
        assert!(!layout.macos_dir.exists());
        assert_eq!(file_count(dir.path()), 1);
    }

    #[test]
    fn test_full_run() {
        let (_dir, layout) = project_with_source();
        let summary = run_selecting(&layout, PlatformSelection::All, || Some(Converter::Inkscape), |_| {
            FakeRasterizer::default()
        })
        .unwrap();
        assert_eq!(summary.converter, "fake");
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.attempted(), 15);
        assert_eq!(summary.succeeded(), 15);
    }

    #[test]
    fn test_single_platform() {
        let (_dir, layout) = project_with_source();
        let summary = run_selecting(&layout, PlatformSelection::Macos, || Some(Converter::Magick), |_| {
            FakeRasterizer::default()
        })
        .unwrap();
        assert_eq!(summary.reports.len(), 1);
        assert_eq!(summary.reports[0].platform, "macos");
        assert!(!layout.linux_dir.exists());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let (_dir, layout) = project_with_source();
        let fake = || FakeRasterizer::default();
        run_selecting(&layout, PlatformSelection::All, || Some(Converter::RsvgConvert), |_| fake()).unwrap();
        let first = snapshot(&layout);
        run_selecting(&layout, PlatformSelection::All, || Some(Converter::RsvgConvert), |_| fake()).unwrap();
        assert_eq!(first, snapshot(&layout));
    }
}
