pub mod error;
pub mod schema;
pub mod store;

pub use error::StoreError;
pub use schema::{ColumnDef, TABLES, TableDef, create_statements, table_def};
pub use store::{DEFAULT_DATABASE_PATH, LoadBatch, LoadMode, LoadSummary, Store, StoreConfig};
