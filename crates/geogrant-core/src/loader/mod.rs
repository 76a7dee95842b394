// crates/geogrant-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! delimited-row parser. Parsed stores can be cached next to their source as
//! bincode, which is much faster to read back than re-parsing the rows.

use crate::error::{GrantError, Result};
use crate::store::GeoStore;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

mod common_io;
mod csv;

pub use common_io::{get_cache_path, open_stream};
pub use csv::{load_csv, parse_row, FIELD_COUNT};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

/// Upper bound on a decoded cache, against corrupt or hostile files.
const CACHE_LIMIT: u64 = 256 * 1024 * 1024;

impl GeoStore {
    /// Loads the bundled sample dataset from [`GeoStore::default_data_dir`].
    pub fn load_default() -> Result<Self> {
        let path = Self::default_data_dir().join(Self::default_dataset_filename());
        Self::load_cached(path)
    }

    /// Parses a delimited dataset file (`.csv`, or `.csv.gz` with `compact`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref())?;
        load_csv(reader)
    }

    /// **Smart Load:** uses the binary cache when it is at least as new as
    /// the source, otherwise parses the source and refreshes the cache.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = get_cache_path(path, CACHE_SUFFIX);

        if is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(store) => return Ok(store),
                Err(e) => {
                    tracing::warn!(cache = %cache_path.display(), "ignoring unreadable cache: {e}")
                }
            }
        }

        let store = Self::load_from_path(path)?;
        if let Err(e) = store.save_as(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), "could not write cache: {e}");
        }
        Ok(store)
    }

    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = open_binary(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(bincode::DefaultOptions::new()
            .with_limit(CACHE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::DefaultOptions::new()
            .with_limit(CACHE_LIMIT)
            .serialize(self)?)
    }

    /// Writes the binary encoding of the store (gzip-wrapped under `compact`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        let mut encoder: Box<dyn Write> = Box::new(flate2::write::GzEncoder::new(
            writer,
            flate2::Compression::default(),
        ));
        #[cfg(not(feature = "compact"))]
        let mut encoder: Box<dyn Write> = Box::new(writer);

        encoder.write_all(&self.to_bytes()?)?;
        encoder.flush()?;
        Ok(())
    }
}

fn open_binary(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GrantError::NotFound(format!("Cache not found at {}: {}", path.display(), e))
    })?;
    let reader = std::io::BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(flate2::read::GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

fn is_cache_fresh(source_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    match fs::metadata(source_path).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        // no source to compare against; trust the cache
        Err(_) => true,
    }
}
