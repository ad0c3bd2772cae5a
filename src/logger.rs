use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

static LOG_PATH: OnceCell<PathBuf> = OnceCell::new();

fn data_dir() -> PathBuf {
    match directories::ProjectDirs::from("", "", "iconforge") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => std::env::temp_dir().join("iconforge"),
    }
}

pub fn default_log_path() -> PathBuf {
    data_dir().join("iconforge.log")
}

/// Enables the file log. Until this is called, log lines are dropped.
pub fn init(path: Option<&Path>) -> PathBuf {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    LOG_PATH.get_or_init(|| path).clone()
}

pub fn log_path() -> Option<&'static PathBuf> {
    LOG_PATH.get()
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn log_line(line: &str) {
    let Some(path) = log_path() else { return };
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(f, "[{}] {}", timestamp(), line);
    }
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}

pub fn log_command(program: &str, args: &[String]) {
    let joined = args.join(" ");
    log_line(&format!("RUN: {} {}", program, joined));
}
