pub mod classify;
pub mod mapping;

pub use classify::{classify_column, CanonicalColumn};
pub use mapping::{build_column_mapping, ColumnMapping};
