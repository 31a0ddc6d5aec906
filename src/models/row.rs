/// Outcome of formatting one field.
///
/// Bad input never fails a row; the variant tells callers whether a cell is
/// legitimately empty or holds an unparseable value passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Formatted(String),
    Empty,
    Fallback(String),
}

impl FieldValue {
    pub fn is_valid(&self) -> bool {
        !matches!(self, FieldValue::Fallback(_))
    }

    pub fn into_cell(self) -> String {
        match self {
            FieldValue::Formatted(s) | FieldValue::Fallback(s) => s,
            FieldValue::Empty => String::new(),
        }
    }
}

/// One CSV line, cells ordered like the profile's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    pub cells: Vec<String>,
}

impl OutputRow {
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

/// A field that could not be parsed and was passed through raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFallback {
    pub row: usize,
    pub column: String,
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOutput {
    pub header: Vec<String>,
    pub rows: Vec<OutputRow>,
    pub fallbacks: Vec<FieldFallback>,
}

impl TransformOutput {
    /// Value of `header` on row `row`, empty when either is unknown.
    pub fn value(&self, row: usize, header: &str) -> &str {
        match self.header.iter().position(|h| h == header) {
            Some(idx) => self.rows.get(row).map(|r| r.cell(idx)).unwrap_or(""),
            None => "",
        }
    }
}
