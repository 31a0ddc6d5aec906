pub mod discrepancy;
pub mod profile;
pub mod record;
pub mod row;

pub use discrepancy::DiscrepancyRecord;
pub use profile::{ColumnRule, ColumnSpec, GroupFormat, Profile};
pub use record::{GroupValue, NumberField, TimesheetRecord, TimesheetResponse};
pub use row::{FieldFallback, FieldValue, OutputRow, TransformOutput};
