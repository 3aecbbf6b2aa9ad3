pub mod csv_records;
pub mod error;

pub use csv_records::{DEFAULT_INPUT_PATH, HeaderIndex, read_records, read_records_from_reader};
pub use error::IngestError;
