//! Hardware data source.
//!
//! The UI only ever sees a [`HardwareSnapshot`]; how it is produced sits
//! behind [`SnapshotSource`] so rendering can be exercised with fixtures.

mod features;
mod procfs;
mod snapshot;

pub use procfs::ProcfsSource;
pub use snapshot::{
    CacheDetail, CpuInfo, FeatureDetail, HardwareSnapshot, HybridInfo, ModelData, ProcessorInfo,
    TlbEntry, TlbInfo,
};

#[cfg(test)]
pub(crate) use snapshot::fixtures;

use crate::config::ProbeConfig;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a snapshot could not be produced.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A required file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The CPU description contained no processor entry.
    #[error("no processor entry in {}", .0.display())]
    NoProcessor(PathBuf),

    /// No provider exists for this platform.
    #[error("hardware probing is not supported on {0}")]
    Unsupported(&'static str),
}

/// Produces the hardware snapshot once at startup.
pub trait SnapshotSource {
    /// Gather the snapshot.
    fn collect(&self) -> Result<HardwareSnapshot, CollectError>;
}

/// Source used when no provider exists for the target OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSource;

impl SnapshotSource for UnsupportedSource {
    fn collect(&self) -> Result<HardwareSnapshot, CollectError> {
        Err(CollectError::Unsupported(std::env::consts::OS))
    }
}

/// The provider for the platform this binary was built for.
pub fn platform_source(config: ProbeConfig) -> Box<dyn SnapshotSource> {
    if cfg!(target_os = "linux") {
        Box::new(ProcfsSource::new(config))
    } else {
        Box::new(UnsupportedSource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_source_errors() {
        let err = UnsupportedSource.collect().unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_io_error_names_path() {
        let err = CollectError::Io {
            path: PathBuf::from("/proc/cpuinfo"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "cannot read /proc/cpuinfo: gone");
    }
}
