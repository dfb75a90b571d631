use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

pub struct JsonStore<P> {
    path: P,
}

impl<P: AsRef<Path>> JsonStore<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }

    /// Returns `None` if nothing has been stored yet.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let path = self.path();
        if !path.is_file() {
            debug!("No JSON file at {}", path.display());
            return Ok(None);
        }
        let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let reader = BufReader::new(file);
        let v = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(v))
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        let path = self.path();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}
