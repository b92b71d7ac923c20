//! Dynamic cell values read from records through column descriptors.

use std::cmp::Ordering;
use std::fmt;

/// A dynamic value for one table cell.
///
/// Rows hand these back for whatever `data_index` a column names; the
/// table never touches record fields directly. `Missing` stands in for
/// fields a record does not have and renders as empty text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Total-order comparison used for sorting.
    ///
    /// Values of the same variant compare naturally. Mismatched
    /// variants (and incomparable floats) compare as equal, so a
    /// misconfigured column degrades to input order instead of
    /// panicking.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Int(a), CellValue::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Float(a), CellValue::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_variant_natural_order() {
        assert_eq!(
            CellValue::from("apple").compare(&CellValue::from("banana")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Int(10).compare(&CellValue::Int(2)),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Float(1.5).compare(&CellValue::Float(1.5)),
            Ordering::Equal
        );
    }

    #[test]
    fn numeric_cross_variant_compares() {
        assert_eq!(
            CellValue::Int(1).compare(&CellValue::Float(1.5)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Float(2.0).compare(&CellValue::Int(1)),
            Ordering::Greater
        );
    }

    #[test]
    fn mismatched_variants_compare_equal() {
        assert_eq!(
            CellValue::from("a").compare(&CellValue::Int(1)),
            Ordering::Equal
        );
        assert_eq!(
            CellValue::Missing.compare(&CellValue::from("a")),
            Ordering::Equal
        );
    }

    #[test]
    fn nan_compares_equal() {
        assert_eq!(
            CellValue::Float(f64::NAN).compare(&CellValue::Float(1.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn missing_displays_empty() {
        assert_eq!(CellValue::Missing.to_string(), "");
        assert_eq!(CellValue::from(None::<i64>), CellValue::Missing);
    }
}
