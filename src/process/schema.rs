use crate::process::raw_table::RawTable;
use crate::process::utils::infer_arrow_dtype;
use arrow::datatypes::{Field, Schema};
use tracing::trace;

/// Infer one nullable field per header from the column's cells.
pub fn infer_schema(table: &RawTable) -> Schema {
    let fields = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let ty = infer_arrow_dtype(table.column(i));
            trace!(column = %name, dtype = ?ty, "inferred column type");
            Field::new(name, ty, true)
        })
        .collect::<Vec<_>>();
    Schema::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::datatypes::DataType;

    #[test]
    fn one_field_per_header() {
        let table = RawTable {
            headers: vec!["Depth".into(), "Lith".into(), "Poro".into()],
            rows: vec![
                vec!["100".into(), "shale".into(), "0.1".into()],
                vec!["110".into(), "sand".into()],
            ],
        };
        let schema = infer_schema(&table);
        let types: Vec<_> = schema
            .fields()
            .iter()
            .map(|f| (f.name().as_str(), f.data_type().clone()))
            .collect();
        assert_eq!(
            types,
            vec![
                ("Depth", DataType::Int64),
                ("Lith", DataType::Utf8),
                ("Poro", DataType::Float64),
            ]
        );
        assert!(schema.fields().iter().all(|f| f.is_nullable()));
    }
}
