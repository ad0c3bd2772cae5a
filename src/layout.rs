use std::path::{Path, PathBuf};

use crate::models::Config;

/// Where the source lives and where each platform's files go.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub root: PathBuf,
    pub name: String,
    pub linux_dir: PathBuf,
    pub macos_dir: PathBuf,
}

impl Layout {
    pub fn new(root: &Path, cfg: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            name: cfg.name.clone(),
            linux_dir: root.join(&cfg.linux_dir),
            macos_dir: root.join(&cfg.macos_dir),
        }
    }

    pub fn source_svg(&self) -> PathBuf {
        self.root.join("assets").join("icons").join(format!("{}.svg", self.name))
    }

    pub fn linux_icons_dir(&self) -> PathBuf { self.linux_dir.join("icons") }
    pub fn linux_icon(&self, size: u32) -> PathBuf {
        self.linux_icons_dir().join(format!("{}-{}.png", self.name, size))
    }
    pub fn linux_main_icon(&self) -> PathBuf { self.linux_dir.join(format!("{}.png", self.name)) }
    pub fn linux_svg_copy(&self) -> PathBuf { self.linux_icons_dir().join(format!("{}.svg", self.name)) }

    pub fn appiconset_dir(&self) -> PathBuf {
        self.macos_dir.join("Runner").join("Assets.xcassets").join("AppIcon.appiconset")
    }
    pub fn macos_icon(&self, size: u32) -> PathBuf {
        self.appiconset_dir().join(macos_icon_file_name(size))
    }
    pub fn manifest_path(&self) -> PathBuf { self.appiconset_dir().join("Contents.json") }
}

pub fn macos_icon_file_name(size: u32) -> String {
    format!("app_icon_{}.png", size)
}
