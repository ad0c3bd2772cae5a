use std::cell::RefCell;
use std::fs;
use std::path::Path;

use crate::converter::{ensure_parent_dir, Rasterizer};
use crate::error::{IconError, Result};
use crate::layout::Layout;
use crate::models::Config;

/// Writes blank transparent PNGs instead of calling an external tool.
#[derive(Default)]
pub struct FakeRasterizer {
    pub fail_sizes: Vec<u32>,
    /// Sizes written as size x size/2 and then reported as wrong.
    pub misshapen_sizes: Vec<u32>,
    pub calls: RefCell<Vec<u32>>,
}

impl FakeRasterizer {
    pub fn failing(sizes: &[u32]) -> Self {
        Self { fail_sizes: sizes.to_vec(), ..Self::default() }
    }
}

impl Rasterizer for FakeRasterizer {
    fn name(&self) -> String { "fake".to_string() }

    fn rasterize(&self, _svg: &Path, png: &Path, size: u32) -> Result<()> {
        self.calls.borrow_mut().push(size);
        if self.fail_sizes.contains(&size) {
            return Err(IconError::Conversion {
                size,
                tool: self.name(),
                detail: "simulated failure".to_string(),
            });
        }
        ensure_parent_dir(png)?;
        if self.misshapen_sizes.contains(&size) {
            let height = (size / 2).max(1);
            image::RgbaImage::new(size, height)
                .save(png)
                .map_err(|e| IconError::Conversion { size, tool: self.name(), detail: e.to_string() })?;
            return Err(IconError::WrongDimensions { size, width: size, height });
        }
        image::RgbaImage::new(size, size)
            .save(png)
            .map_err(|e| IconError::Conversion { size, tool: self.name(), detail: e.to_string() })
    }
}

pub const SAMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><circle cx="5" cy="5" r="4"/></svg>"#;

/// Scratch project with `assets/icons/aks.svg` in place.
pub fn project_with_source() -> (tempfile::TempDir, Layout) {
    let dir = tempfile::tempdir().unwrap();
    let layout = Layout::new(dir.path(), &Config::default());
    let svg = layout.source_svg();
    fs::create_dir_all(svg.parent().unwrap()).unwrap();
    fs::write(&svg, SAMPLE_SVG).unwrap();
    (dir, layout)
}
