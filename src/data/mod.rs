//! Data module - CSV loading and frequency derivation

mod frequency;
mod loader;

pub use frequency::FrequencyTable;
pub use loader::{load_dataset, LoaderError};
