// src/process/mod.rs
pub mod convert;
pub mod raw_table;
pub mod rename;
pub mod rows;
pub mod schema;
pub mod units;
pub mod utils;

use crate::{
    application::{detect_application, Application, ApplicationChoice},
    columns::build_column_mapping,
    config::{LoaderConfig, UnitSystem},
    error::LoadError,
};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

pub use rows::{Row, Value};

/// A validated well dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellData {
    pub application: Application,
    /// Final column names in table order.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default)]
pub struct WellDataLoader {
    config: LoaderConfig,
}

impl WellDataLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load, normalize and validate the CSV at `path`, returning only the rows.
    pub fn load<P: AsRef<Path>>(
        &self,
        path: P,
        application: Option<&str>,
        units: UnitSystem,
    ) -> Result<Vec<Row>, LoadError> {
        Ok(self.load_table(path, application, units)?.rows)
    }

    /// Load the CSV at `path`:
    /// - renames recognised columns to their canonical names,
    /// - adds the default lithology when none is present,
    /// - converts imperial depth, permeability and temperature to metric,
    /// - resolves the application (detecting it for `None`/`"auto"`),
    /// - checks the application's required columns.
    ///
    /// Nothing is returned unless every step succeeds.
    #[tracing::instrument(level = "info", skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load_table<P: AsRef<Path>>(
        &self,
        path: P,
        application: Option<&str>,
        units: UnitSystem,
    ) -> Result<WellData, LoadError> {
        let path = path.as_ref();

        // 1) read + type
        let raw = raw_table::read_raw_table(path, self.config.delimiter_byte())?;
        let typed = convert::convert_to_final_types(&raw, schema::infer_schema(&raw))?;
        drop(raw);

        // 2) canonical names
        let mapping = build_column_mapping(&column_names(&typed), self.config.collision_policy)?;
        debug!(renamed = mapping.len(), superseded = mapping.superseded().len(), "column mapping built");
        let renamed = rename::apply_column_mapping(&typed, &mapping)?;

        // 3) default lithology
        let filled = rename::fill_default_lithology(&renamed, &self.config.default_lithology)?;

        // 4) units
        let converted = units::convert_units(&filled, units)?;

        // 5) + 6) application and required columns
        let columns = column_names(&converted);
        let application = resolve_application(ApplicationChoice::parse(application), &columns)?;
        check_required_columns(application, &columns)?;

        // 7) records
        let rows = rows::batch_to_rows(&converted)?;
        info!(application = %application, rows = rows.len(), "well data loaded");

        Ok(WellData {
            application,
            columns,
            rows,
        })
    }
}

/// Load well data with the default configuration.
pub fn load_well_data<P: AsRef<Path>>(
    path: P,
    application: Option<&str>,
    units: UnitSystem,
) -> Result<Vec<Row>, LoadError> {
    WellDataLoader::default().load(path, application, units)
}

fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect()
}

fn resolve_application(
    choice: ApplicationChoice,
    columns: &[String],
) -> Result<Application, LoadError> {
    let (label, resolved) = match choice {
        ApplicationChoice::Auto => {
            let detected = detect_application(columns);
            info!(application = %detected, "detected application");
            (detected.to_string(), detected)
        }
        ApplicationChoice::Named(label) => {
            let resolved = Application::from_label(&label).unwrap_or(Application::Unknown);
            (label, resolved)
        }
    };

    if !resolved.is_valid() {
        return Err(LoadError::InvalidApplication {
            application: label,
            columns: columns.to_vec(),
        });
    }
    Ok(resolved)
}

fn check_required_columns(application: Application, columns: &[String]) -> Result<(), LoadError> {
    let missing: Vec<String> = application
        .required_columns()
        .iter()
        .filter(|req| !columns.iter().any(|c| c == req.as_str()))
        .map(|req| req.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns {
            application: application.to_string(),
            missing,
        })
    }
}
