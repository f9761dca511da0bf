//! Runtime configuration: terminal setup, colors, logging and probe roots.
//!
//! Everything here is built once at startup and then only read.

use crate::buffer::{Modifiers, Rgb, Style};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the log file. Unset disables logging.
pub const LOG_FILE_ENV: &str = "EARHW_LOG_FILE";
/// Environment variable holding the `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "EARHW_LOG";
/// Filter used when [`LOG_FILTER_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Terminal setup options.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Whether to enable mouse capture.
    pub enable_mouse: bool,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            enable_mouse: true,
            alternate_screen: true,
        }
    }
}

/// The fixed set of styles used by the UI.
///
/// Built once and handed to the renderers by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Body text and the unselected menu items.
    pub normal: Style,
    /// The selected menu item.
    pub reverse: Style,
    /// Letters of the window title.
    pub title: Style,
    /// Section headings and group labels.
    pub section: Style,
    /// Frame lines.
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: Style::new(Rgb::WHITE, Rgb::BLACK),
            reverse: Style::new(Rgb::BLACK, Rgb::WHITE),
            title: Style::new(Rgb::YELLOW, Rgb::BLACK).with_modifiers(Modifiers::BOLD),
            section: Style::new(Rgb::GREEN, Rgb::BLACK),
            border: Style::new(Rgb::WHITE, Rgb::BLACK),
        }
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Destination file; `None` disables logging.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Read [`LOG_FILE_ENV`] and [`LOG_FILTER_ENV`].
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            file: non_empty(LOG_FILE_ENV).map(PathBuf::from),
            filter: non_empty(LOG_FILTER_ENV).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

/// Filesystem roots the Linux provider reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Root of procfs, normally `/proc`.
    pub proc_root: PathBuf,
    /// Root of sysfs, normally `/sys`.
    pub sys_root: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
            sys_root: PathBuf::from("/sys"),
        }
    }
}
