use crate::error::LoadError;
use crate::process::raw_table::RawTable;
use arrow::{
    array::{ArrayRef, Float64Builder, Int64Builder, StringBuilder},
    datatypes::{DataType, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Convert the raw string cells into a typed batch following `schema`.
///
/// Empty cells become nulls. Numeric cells are parsed after trimming; text is
/// kept verbatim.
pub fn convert_to_final_types(table: &RawTable, schema: Schema) -> Result<RecordBatch, LoadError> {
    let mut out = Vec::with_capacity(schema.fields().len());

    for (i, fld) in schema.fields().iter().enumerate() {
        let col: ArrayRef = match fld.data_type() {
            DataType::Int64 => {
                let mut b = Int64Builder::with_capacity(table.rows.len());
                for raw in table.column(i) {
                    b.append_option(raw.trim().parse().ok());
                }
                Arc::new(b.finish())
            }
            DataType::Float64 => {
                let mut b = Float64Builder::with_capacity(table.rows.len());
                for raw in table.column(i) {
                    b.append_option(raw.trim().parse().ok());
                }
                Arc::new(b.finish())
            }
            // Everything else is text
            _ => {
                let mut b = StringBuilder::new();
                for raw in table.column(i) {
                    if raw.is_empty() {
                        b.append_null();
                    } else {
                        b.append_value(raw);
                    }
                }
                Arc::new(b.finish())
            }
        };
        out.push(col);
    }

    RecordBatch::try_new(Arc::new(schema), out).map_err(Into::into)
}
