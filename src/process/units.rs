use crate::columns::CanonicalColumn;
use crate::config::UnitSystem;
use crate::error::LoadError;
use arrow::{
    array::{Array, ArrayRef, Float64Array, Int64Array},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

pub const FEET_TO_METERS: f64 = 0.3048;
pub const MILLIDARCY_TO_SQUARE_METERS: f64 = 0.986923e-15;

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn conversion_for(column: &str) -> Option<fn(f64) -> f64> {
    if column == CanonicalColumn::Depth.as_str() {
        Some(|v| v * FEET_TO_METERS)
    } else if column == CanonicalColumn::Permeability.as_str() {
        Some(|v| v * MILLIDARCY_TO_SQUARE_METERS)
    } else if column == CanonicalColumn::Temperature.as_str() {
        Some(fahrenheit_to_celsius)
    } else {
        None
    }
}

/// Bring depth, permeability and temperature to metric.
///
/// Only `Imperial` input is touched. Converted columns become `Float64`.
pub fn convert_units(batch: &RecordBatch, units: UnitSystem) -> Result<RecordBatch, LoadError> {
    if units == UnitSystem::Metric {
        return Ok(batch.clone());
    }

    let schema = batch.schema();
    let mut fields = Vec::with_capacity(schema.fields().len());
    let mut cols = Vec::with_capacity(schema.fields().len());
    for (i, field) in schema.fields().iter().enumerate() {
        let arr = batch.column(i);
        match conversion_for(field.name()) {
            Some(op) => {
                let converted: Float64Array =
                    as_f64_values(arr, field.name())?.map(|v| v.map(op)).collect();
                fields.push(Field::new(field.name(), DataType::Float64, true));
                cols.push(Arc::new(converted) as ArrayRef);
            }
            None => {
                fields.push(Field::clone(field));
                cols.push(arr.clone());
            }
        }
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols).map_err(Into::into)
}

fn as_f64_values<'a>(
    arr: &'a ArrayRef,
    column: &str,
) -> Result<Box<dyn Iterator<Item = Option<f64>> + 'a>, LoadError> {
    if let Some(floats) = arr.as_any().downcast_ref::<Float64Array>() {
        return Ok(Box::new(floats.iter()));
    }
    if let Some(ints) = arr.as_any().downcast_ref::<Int64Array>() {
        return Ok(Box::new(ints.iter().map(|v| v.map(|i| i as f64))));
    }
    Err(LoadError::NonNumericColumn {
        column: column.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::StringArray;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    fn batch() -> RecordBatch {
        let schema = Schema::new(vec![
            Field::new("depth", DataType::Int64, true),
            Field::new("permeability", DataType::Float64, true),
            Field::new("temperature", DataType::Float64, true),
            Field::new("lithology", DataType::Utf8, true),
        ]);
        let cols: Vec<ArrayRef> = vec![
            Arc::new(Int64Array::from(vec![Some(1000), None])),
            Arc::new(Float64Array::from(vec![150.0, 2.5])),
            Arc::new(Float64Array::from(vec![212.0, 32.0])),
            Arc::new(StringArray::from(vec!["shale", "sand"])),
        ];
        RecordBatch::try_new(Arc::new(schema), cols).expect("valid batch")
    }

    fn floats(batch: &RecordBatch, name: &str) -> Float64Array {
        let idx = batch.schema().index_of(name).expect("column present");
        batch
            .column(idx)
            .as_any()
            .downcast_ref::<Float64Array>()
            .expect("float column")
            .clone()
    }

    #[test]
    fn metric_is_untouched() -> anyhow::Result<()> {
        let input = batch();
        let out = convert_units(&input, UnitSystem::Metric)?;
        assert_eq!(out, input);
        Ok(())
    }

    #[test]
    fn imperial_converts_and_reverses() -> anyhow::Result<()> {
        let out = convert_units(&batch(), UnitSystem::Imperial)?;

        let depth = floats(&out, "depth");
        assert!(approx(depth.value(0), 304.8));
        assert!(depth.is_null(1));
        assert!(approx(depth.value(0) / FEET_TO_METERS, 1000.0));

        let perm = floats(&out, "permeability");
        assert!(approx(perm.value(0) / MILLIDARCY_TO_SQUARE_METERS, 150.0));
        assert!(approx(perm.value(1) / MILLIDARCY_TO_SQUARE_METERS, 2.5));

        let temp = floats(&out, "temperature");
        assert!(approx(temp.value(0), 100.0));
        assert!(approx(temp.value(1), 0.0));
        assert!(approx(temp.value(0) * 9.0 / 5.0 + 32.0, 212.0));

        // untouched text column
        assert_eq!(out.column(3).data_type(), &DataType::Utf8);
        Ok(())
    }

    #[test]
    fn text_target_column_is_rejected() {
        let schema = Schema::new(vec![Field::new("depth", DataType::Utf8, true)]);
        let input = RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(StringArray::from(vec!["deep"])) as ArrayRef],
        )
        .expect("valid batch");
        let err = convert_units(&input, UnitSystem::Imperial).unwrap_err();
        assert!(matches!(err, LoadError::NonNumericColumn { ref column } if column == "depth"));
    }
}
