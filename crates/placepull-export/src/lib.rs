pub mod error;
pub mod row;
pub mod writer;

pub use error::ExportError;
pub use row::{to_rows, ExportRow, COLUMNS, SENTINEL};
pub use writer::write_csv;
