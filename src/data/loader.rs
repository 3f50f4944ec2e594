//! CSV dataset loading with Polars.

use std::path::Path;

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: std::path::PathBuf,
        source: PolarsError,
    },
}

/// Load the report dataset from a CSV file.
///
/// A missing file or malformed content is fatal. Columns the report needs
/// are not checked here, they surface when a section asks for them.
pub fn load_dataset(path: &Path) -> Result<DataFrame, LoaderError> {
    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .finish()
        .and_then(|lazy| lazy.collect())
        .map_err(|source| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!(
        "Loaded {} rows with columns {:?}",
        df.height(),
        df.get_column_names()
    );
    Ok(df)
}
