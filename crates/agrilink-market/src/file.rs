use agrilink_types::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::snapshot::MarketSnapshot;
use crate::source::MarketData;

/// Market data read from a JSON file
///
/// The file is re-read on every snapshot, so edits are picked up without a
/// restart. Each read yields a fresh snapshot; earlier ones stay untouched.
#[derive(Debug, Clone)]
pub struct FileMarketData {
    path: PathBuf,
}

impl FileMarketData {
    /// Create a source and check that the file currently loads
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let source = FileMarketData { path: path.into() };
        source.load()?;
        Ok(source)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<MarketSnapshot> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            tracing::warn!("Failed to read market data {}: {}", self.path.display(), err);
            err
        })?;
        let snapshot = MarketSnapshot::from_json_str(&raw)?;
        tracing::debug!(
            "Loaded market data from {} ({} cities, {} commodities)",
            self.path.display(),
            snapshot.cities.len(),
            snapshot.commodities().count()
        );
        Ok(snapshot)
    }

    /// Write a snapshot to disk in the format this source reads
    pub fn write(path: impl AsRef<Path>, snapshot: &MarketSnapshot) -> Result<()> {
        std::fs::write(path, snapshot.to_json_string()?)?;
        Ok(())
    }
}

impl MarketData for FileMarketData {
    fn snapshot(&self) -> Result<Arc<MarketSnapshot>> {
        Ok(Arc::new(self.load()?))
    }
}
