pub mod application;
pub mod columns;
pub mod config;
pub mod error;
pub mod process;

pub use application::{detect_application, Application, ApplicationChoice};
pub use columns::{build_column_mapping, classify_column, CanonicalColumn, ColumnMapping};
pub use config::{CollisionPolicy, LoaderConfig, UnitSystem, DEFAULT_LITHOLOGY};
pub use error::{ErrorKind, LoadError};
pub use process::{load_well_data, Row, Value, WellData, WellDataLoader};
