use arrow::datatypes::DataType;

/// Infer Arrow dtype for a whole column of raw cells.
///
/// Empty cells are ignored; a column with no values at all is `Float64`.
pub fn infer_arrow_dtype<'a, I>(cells: I) -> DataType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut all_int = true;
    let mut seen_value = false;
    for raw in cells {
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }
        seen_value = true;
        if all_int && s.parse::<i64>().is_ok() {
            continue;
        }
        all_int = false;
        if s.parse::<f64>().is_err() {
            return DataType::Utf8;
        }
    }
    if all_int && seen_value {
        DataType::Int64
    } else {
        DataType::Float64
    }
}
