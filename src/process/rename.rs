use crate::columns::mapping::{ColumnFate, ColumnMapping};
use crate::columns::CanonicalColumn;
use crate::error::LoadError;
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// Rename mapped columns, keep unmapped ones, drop shadowed duplicates.
pub fn apply_column_mapping(
    batch: &RecordBatch,
    mapping: &ColumnMapping,
) -> Result<RecordBatch, LoadError> {
    if mapping.is_empty() {
        return Ok(batch.clone());
    }

    let schema = batch.schema();
    let mut fields = Vec::with_capacity(schema.fields().len());
    let mut cols = Vec::with_capacity(schema.fields().len());
    for (i, field) in schema.fields().iter().enumerate() {
        match mapping.fate(field.name()) {
            ColumnFate::Rename(canonical) => {
                fields.push(Field::new(
                    canonical.as_str(),
                    field.data_type().clone(),
                    field.is_nullable(),
                ));
            }
            ColumnFate::Keep => fields.push(Field::clone(field)),
            ColumnFate::Drop => continue,
        }
        cols.push(batch.column(i).clone());
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols).map_err(Into::into)
}

/// Append a constant `lithology` column unless the batch already has one.
pub fn fill_default_lithology(
    batch: &RecordBatch,
    lithology: &str,
) -> Result<RecordBatch, LoadError> {
    let name = CanonicalColumn::Lithology.as_str();
    if batch.schema().index_of(name).is_ok() {
        return Ok(batch.clone());
    }

    let mut fields: Vec<Field> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| Field::clone(f))
        .collect();
    fields.push(Field::new(name, DataType::Utf8, true));

    let filled: StringArray = std::iter::repeat(Some(lithology))
        .take(batch.num_rows())
        .collect();
    let mut cols = batch.columns().to_vec();
    cols.push(Arc::new(filled) as ArrayRef);

    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::build_column_mapping;
    use crate::config::CollisionPolicy;
    use arrow::array::{Array, Float64Array};

    fn batch(names: &[&str]) -> RecordBatch {
        let fields: Vec<Field> = names
            .iter()
            .map(|n| Field::new(*n, DataType::Float64, true))
            .collect();
        let cols: Vec<ArrayRef> = names
            .iter()
            .enumerate()
            .map(|(i, _)| Arc::new(Float64Array::from(vec![i as f64, i as f64 + 0.5])) as ArrayRef)
            .collect();
        RecordBatch::try_new(Arc::new(Schema::new(fields)), cols).expect("valid batch")
    }

    fn names(batch: &RecordBatch) -> Vec<String> {
        batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    #[test]
    fn renames_in_place() -> anyhow::Result<()> {
        let input = batch(&["Well_ID", "Depth_ft", "Temp_F"]);
        let mapping = build_column_mapping(&["Well_ID", "Depth_ft", "Temp_F"], CollisionPolicy::LastWins)?;
        let out = apply_column_mapping(&input, &mapping)?;
        assert_eq!(names(&out), vec!["Well_ID", "depth", "temperature"]);
        Ok(())
    }

    #[test]
    fn shadowed_duplicate_is_dropped() -> anyhow::Result<()> {
        let input = batch(&["depth", "Depth_ft"]);
        let mapping = build_column_mapping(&["depth", "Depth_ft"], CollisionPolicy::LastWins)?;
        let out = apply_column_mapping(&input, &mapping)?;
        assert_eq!(names(&out), vec!["depth"]);
        let depth = out
            .column(0)
            .as_any()
            .downcast_ref::<Float64Array>()
            .expect("float column");
        // values come from the winning column
        assert_eq!(depth.value(0), 1.0);
        Ok(())
    }

    #[test]
    fn lithology_added_once() -> anyhow::Result<()> {
        let input = batch(&["depth"]);
        let out = fill_default_lithology(&input, "sandstone")?;
        assert_eq!(names(&out), vec!["depth", "lithology"]);
        let lith = out
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .expect("utf8 column");
        assert_eq!(lith.len(), 2);
        assert!(lith.iter().all(|v| v == Some("sandstone")));

        let again = fill_default_lithology(&out, "limestone")?;
        assert_eq!(names(&again), vec!["depth", "lithology"]);
        Ok(())
    }
}
