//! Row identity and cell values for the data table.
//!
//! A table row is any type implementing [`Row`]. Columns read cells out of
//! rows through accessor closures that produce a [`CellValue`], which carries
//! the ordering used for sorting and the text used for display.
//!
//! [`Record`] is a ready-made row backed by a JSON object, for data that is
//! loaded at runtime and has no fixed shape.

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use super::data_table::Column;

/// The unique identifier of a table row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Numeric id.
    Int(i64),
    /// String id.
    Str(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{}", id),
            RowId::Str(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        RowId::Int(id)
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId::Str(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        RowId::Str(id)
    }
}

/// A record that can be displayed as a table row.
///
/// Ids are expected to be unique within one table but the table does not
/// rely on it: selection tracks row instances, not ids.
pub trait Row {
    /// The row's identifier.
    fn id(&self) -> RowId;
}

/// A single cell value produced by a column accessor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// The field does not exist on the row.
    #[default]
    Absent,
    /// The field exists and holds JSON `null`.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// Compare two cells by their natural ordering.
    ///
    /// Numbers compare numerically (integers and floats mix), text compares
    /// lexicographically, `false < true`. Integers and floats compare
    /// exactly, without rounding the integer. Returns `None` when neither
    /// value is less or greater than the other: different kinds, absent or
    /// null fields and NaN.
    pub fn compare(&self, other: &CellValue) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Bool(a), CellValue::Bool(b)) => Some(a.cmp(b)),
            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Float(a), CellValue::Float(b)) => a.partial_cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) if !b.is_nan() => {
                Some(int_float_cmp(*a, *b))
            }
            (CellValue::Float(a), CellValue::Int(b)) if !a.is_nan() => {
                Some(int_float_cmp(*b, *a).reverse())
            }
            (CellValue::Text(a), CellValue::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total ordering used when sorting rows.
    ///
    /// Agrees with [`CellValue::compare`] wherever that returns an ordering.
    /// Values it leaves unordered are grouped by kind (booleans, numbers,
    /// text, null, then absent). Positive NaN sorts after every other
    /// number and negative NaN before, as in [`f64::total_cmp`].
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Float(a), CellValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
            }
            (CellValue::Int(_), CellValue::Float(b)) if b.is_nan() => nan_side(*b).reverse(),
            (CellValue::Float(a), CellValue::Int(_)) if a.is_nan() => nan_side(*a),
            _ => self
                .compare(other)
                .unwrap_or_else(|| self.kind_rank().cmp(&other.kind_rank())),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Bool(_) => 0,
            CellValue::Int(_) | CellValue::Float(_) => 1,
            CellValue::Text(_) => 2,
            CellValue::Null => 3,
            CellValue::Absent => 4,
        }
    }

    /// Check if the field was absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }
}

/// Exact comparison of an integer with a non-NaN float.
fn int_float_cmp(int: i64, float: f64) -> Ordering {
    // 2^63 is exactly representable; every i64 lies in [-2^63, 2^63).
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    if float >= BOUND {
        return Ordering::Less;
    }
    if float < -BOUND {
        return Ordering::Greater;
    }
    let floor = float.floor();
    match i128::from(int).cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Ordering::Less,
        ordering => ordering,
    }
}

/// Where a NaN float sits relative to every number.
fn nan_side(nan: f64) -> Ordering {
    if nan.is_sign_negative() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Absent => write!(f, "undefined"),
            CellValue::Null => write!(f, "null"),
            CellValue::Bool(v) => write!(f, "{}", v),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Absent)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Int(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or_default(),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Errors raised while turning JSON into records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level value is not an array.
    #[error("expected a JSON array of objects")]
    NotAnArray,

    /// An array element is not an object.
    #[error("element {0} is not a JSON object")]
    NotAnObject(usize),
}

/// A row backed by a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RowId,
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record from a JSON object.
    ///
    /// The id comes from the `id` field when it is a number or string,
    /// otherwise from `position`.
    pub fn new(position: usize, fields: Map<String, Value>) -> Self {
        let id = match fields.get("id") {
            Some(Value::Number(n)) if n.is_i64() => RowId::Int(n.as_i64().unwrap_or_default()),
            Some(Value::String(s)) => RowId::Str(s.clone()),
            _ => RowId::Int(position as i64),
        };
        Self { id, fields }
    }

    /// Read a field as a cell value, `Absent` when missing.
    pub fn get(&self, field: &str) -> CellValue {
        self.fields
            .get(field)
            .map(CellValue::from)
            .unwrap_or(CellValue::Absent)
    }

    /// Field names in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl Row for Record {
    fn id(&self) -> RowId {
        self.id.clone()
    }
}

/// Parse a JSON array of objects into records.
pub fn parse_records(json: &str) -> Result<Vec<Record>, RecordError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(RecordError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::Object(fields) => Ok(Record::new(position, fields)),
            _ => Err(RecordError::NotAnObject(position)),
        })
        .collect()
}

impl Column<Record> {
    /// Create a column that reads `field` from a [`Record`].
    pub fn field(
        key: impl Into<String>,
        title: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        let field = field.into();
        Column::new(key, title, move |record: &Record| record.get(&field))
    }

    /// Derive one sortable column per field of `record`, titled by the
    /// capitalized field name. The `id` field is skipped.
    pub fn infer_from(record: &Record) -> Vec<Self> {
        record
            .field_names()
            .filter(|name| *name != "id")
            .map(|name| Column::field(name, capitalize(name), name).sortable(true))
            .collect()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_displays_undefined() {
        assert_eq!(CellValue::Absent.to_string(), "undefined");
        assert_eq!(CellValue::from(None::<i64>).to_string(), "undefined");
    }

    #[test]
    fn test_display_values() {
        assert_eq!(CellValue::from(30_i64).to_string(), "30");
        assert_eq!(CellValue::from(25.0).to_string(), "25");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from("Alice").to_string(), "Alice");
    }

    #[test]
    fn test_natural_ordering() {
        assert!(CellValue::from("Alice") < CellValue::from("Bob"));
        assert!(CellValue::from(25_i64) < CellValue::from(30_i64));
        assert!(CellValue::from(25_i64) < CellValue::from(25.5));
        assert!(CellValue::from(false) < CellValue::from(true));
    }

    #[test]
    fn test_mixed_kinds_are_unordered() {
        assert_eq!(CellValue::from("1").compare(&CellValue::from(1_i64)), None);
        assert_eq!(CellValue::Absent.compare(&CellValue::from(1_i64)), None);
        assert_eq!(CellValue::Absent.compare(&CellValue::Absent), None);
        assert_eq!(
            CellValue::from(f64::NAN).compare(&CellValue::from(1.0)),
            None
        );
    }

    #[test]
    fn test_sort_cmp_agrees_with_natural_ordering() {
        let a = CellValue::from("Alice");
        let b = CellValue::from("Bob");
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
        assert_eq!(b.sort_cmp(&a), Ordering::Greater);
        assert_eq!(a.sort_cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_int_float_compare_exactly_past_f64_precision() {
        let big = 1_i64 << 53;
        let low = CellValue::Int(big);
        let high = CellValue::Int(big + 1);
        let float = CellValue::Float(big as f64);

        assert_eq!(low.sort_cmp(&high), Ordering::Less);
        assert_eq!(low.sort_cmp(&float), Ordering::Equal);
        assert_eq!(high.sort_cmp(&float), Ordering::Greater);
        assert_eq!(float.sort_cmp(&high), Ordering::Less);
    }

    #[test]
    fn test_int_float_compare_fractions_and_limits() {
        assert_eq!(CellValue::Int(1).compare(&CellValue::Float(1.5)), Some(Ordering::Less));
        assert_eq!(
            CellValue::Int(-2).compare(&CellValue::Float(-1.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            CellValue::Int(0).compare(&CellValue::Float(-0.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            CellValue::Int(i64::MAX).compare(&CellValue::Float(f64::INFINITY)),
            Some(Ordering::Less)
        );
        assert_eq!(
            CellValue::Int(i64::MIN).compare(&CellValue::Float(-9.3e18)),
            Some(Ordering::Greater)
        );
        assert_eq!(CellValue::Float(-0.0).sort_cmp(&CellValue::Float(0.0)), Ordering::Equal);
    }

    #[test]
    fn test_nan_sorts_after_numbers() {
        let nan = CellValue::Float(f64::NAN);
        assert_eq!(nan.sort_cmp(&CellValue::Int(i64::MAX)), Ordering::Greater);
        assert_eq!(CellValue::Int(3).sort_cmp(&nan), Ordering::Less);
        assert_eq!(nan.sort_cmp(&CellValue::Float(f64::INFINITY)), Ordering::Greater);
    }

    #[test]
    fn test_mixed_number_sort_is_consistent() {
        let big = 1_i64 << 53;
        let mut values = Vec::new();
        for i in 0..100 {
            values.push(CellValue::Int(big + (i % 7) - 3));
            values.push(CellValue::Float((big + (i % 5) - 2) as f64));
            values.push(CellValue::Float(i as f64 + 0.5));
            values.push(CellValue::Int(i));
        }
        values.sort_by(CellValue::sort_cmp);
        for pair in values.windows(2) {
            assert_ne!(pair[0].sort_cmp(&pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_sort_cmp_groups_mixed_kinds() {
        let mut values = vec![
            CellValue::Absent,
            CellValue::Null,
            CellValue::from("x"),
            CellValue::from(3_i64),
            CellValue::from(true),
            CellValue::from(1.5),
        ];
        values.sort_by(CellValue::sort_cmp);
        assert_eq!(
            values,
            vec![
                CellValue::from(true),
                CellValue::from(1.5),
                CellValue::from(3_i64),
                CellValue::from("x"),
                CellValue::Null,
                CellValue::Absent,
            ]
        );
    }

    #[test]
    fn test_row_id_display() {
        assert_eq!(RowId::from(7_i64).to_string(), "7");
        assert_eq!(RowId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_parse_records() {
        let records = parse_records(
            r#"[{"id": 1, "name": "Bob", "age": 30}, {"id": "u2", "name": "Alice"}]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), RowId::Int(1));
        assert_eq!(records[1].id(), RowId::Str("u2".to_string()));
        assert_eq!(records[0].get("age"), CellValue::Int(30));
        assert!(records[1].get("age").is_absent());
    }

    #[test]
    fn test_parse_records_without_id_uses_position() {
        let records = parse_records(r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();
        assert_eq!(records[1].id(), RowId::Int(1));
    }

    #[test]
    fn test_parse_records_null_displays_null() {
        let records = parse_records(r#"[{"id": 1, "email": null}]"#).unwrap();
        let email = records[0].get("email");
        assert_eq!(email, CellValue::Null);
        assert!(!email.is_absent());
        assert_eq!(email.to_string(), "null");
        assert_eq!(records[0].get("phone").to_string(), "undefined");
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"id": 1}"#),
            Err(RecordError::NotAnArray)
        ));
    }

    #[test]
    fn test_parse_records_rejects_non_object_element() {
        assert!(matches!(
            parse_records(r#"[{"id": 1}, 2]"#),
            Err(RecordError::NotAnObject(1))
        ));
    }

    #[test]
    fn test_parse_records_rejects_bad_json() {
        assert!(matches!(parse_records("[{"), Err(RecordError::Json(_))));
    }

    #[test]
    fn test_field_column_reads_record() {
        let records = parse_records(r#"[{"id": 1, "name": "Bob"}]"#).unwrap();
        let name = Column::field("name", "Name", "name");
        let missing = Column::field("email", "Email", "email");
        assert_eq!(name.value(&records[0]), CellValue::from("Bob"));
        assert_eq!(missing.display(&records[0]), "undefined");
    }

    #[test]
    fn test_infer_columns_skips_id() {
        let records = parse_records(r#"[{"id": 1, "name": "Bob", "age": 30}]"#).unwrap();
        let columns = Column::infer_from(&records[0]);
        let titles: Vec<&str> = columns.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["Name", "Age"]);
        assert!(columns.iter().all(|c| c.is_sortable()));
    }
}
