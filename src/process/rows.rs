use crate::error::LoadError;
use arrow::{
    array::{Array, ArrayRef, Float64Array, Int64Array, StringArray},
    record_batch::RecordBatch,
    util::display::array_value_to_string,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One cell of a loaded well record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Column name → value for one record, keys in table column order.
pub type Row = IndexMap<String, Value>;

fn value_at(col: &ArrayRef, i: usize) -> Result<Value, LoadError> {
    if col.is_null(i) {
        return Ok(Value::Null);
    }
    let any = col.as_any();
    if let Some(a) = any.downcast_ref::<Int64Array>() {
        Ok(Value::Int(a.value(i)))
    } else if let Some(a) = any.downcast_ref::<Float64Array>() {
        Ok(Value::Float(a.value(i)))
    } else if let Some(a) = any.downcast_ref::<StringArray>() {
        Ok(Value::Text(a.value(i).to_string()))
    } else {
        Ok(Value::Text(array_value_to_string(col, i)?))
    }
}

/// Flatten the batch into one `Row` per record, preserving record order.
pub fn batch_to_rows(batch: &RecordBatch) -> Result<Vec<Row>, LoadError> {
    let schema = batch.schema();
    let mut rows = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        let mut row = Row::new();
        for (field, col) in schema.fields().iter().zip(batch.columns()) {
            row.insert(field.name().clone(), value_at(col, i)?);
        }
        rows.push(row);
    }
    Ok(rows)
}
