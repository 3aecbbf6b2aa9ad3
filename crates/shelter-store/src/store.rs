//! SQLite-backed loader for the normalized tables.
//!
//! Every load runs inside one transaction: either all rows of all seven
//! tables are committed or none are.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rusqlite::{Connection, OpenFlags, Transaction, params};
use serde::Serialize;
use tracing::{debug, info};

use shelter_model::{AnimalEntity, Category, LookupTable, ShelterEntity, SurrogateKey};

use crate::error::StoreError;
use crate::schema::{ANIMALS, SHELTER, TABLES, table_def};

/// Database location used when none is configured.
pub const DEFAULT_DATABASE_PATH: &str = "./animals.db";

const INSERT_ANIMAL: &str = "INSERT INTO Animals \
     (id, type_id, name, breed_id, color1_id, color2_id, date_of_birth) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

const INSERT_SHELTER: &str = "INSERT INTO Shelter \
     (id, animal_id, outcome_subtype_id, outcome_month, outcome_year, outcome_type_id, \
     age_upon_outcome) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
            busy_timeout_ms: 5_000,
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// What to do with rows already present in the target tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Insert alongside existing rows; key collisions fail the load.
    #[default]
    Append,
    /// Delete existing rows first, within the same transaction.
    Replace,
}

/// Rows to write in one load.
#[derive(Debug, Clone, Copy)]
pub struct LoadBatch<'a> {
    pub lookups: &'a [LookupTable],
    pub animals: &'a [AnimalEntity],
    pub shelter: &'a [ShelterEntity],
}

/// Rows written per table, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub tables: Vec<(String, usize)>,
}

impl LoadSummary {
    pub fn rows_for(&self, table: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(table))
            .map(|(_, count)| *count)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|(_, count)| count).sum()
    }
}

pub struct Store {
    connection: Connection,
}

impl Store {
    pub fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE;
        let connection = Connection::open_with_flags(&config.path, flags)
            .map_err(|source| open_error(&config.path, source))?;
        connection
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(|source| open_error(&config.path, source))?;
        Self::from_connection(connection, &config.path)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let path = Path::new(":memory:");
        let connection = Connection::open_in_memory().map_err(|source| open_error(path, source))?;
        Self::from_connection(connection, path)
    }

    fn from_connection(connection: Connection, path: &Path) -> Result<Self, StoreError> {
        connection
            .execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|source| open_error(path, source))?;
        Ok(Self { connection })
    }

    /// Create all tables that do not exist yet.
    pub fn create_schema(&mut self) -> Result<(), StoreError> {
        let tx = self.connection.transaction().map_err(StoreError::Transaction)?;
        create_tables(&tx)?;
        tx.commit().map_err(StoreError::Transaction)
    }

    /// Create the schema and insert every row of `batch` atomically.
    ///
    /// On any failure the transaction is rolled back and nothing from
    /// this call remains in the database.
    pub fn load(&mut self, batch: &LoadBatch<'_>, mode: LoadMode) -> Result<LoadSummary, StoreError> {
        let start = Instant::now();
        let tx = self.connection.transaction().map_err(StoreError::Transaction)?;
        create_tables(&tx)?;
        if mode == LoadMode::Replace {
            clear_tables(&tx)?;
        }

        let mut summary = LoadSummary::default();
        for lookup in batch.lookups {
            let count = insert_lookup(&tx, lookup)?;
            summary
                .tables
                .push((lookup.category.table_name().to_string(), count));
        }
        let count = insert_animals(&tx, batch.animals)?;
        summary.tables.push((ANIMALS.to_string(), count));
        let count = insert_shelter(&tx, batch.shelter)?;
        summary.tables.push((SHELTER.to_string(), count));

        tx.commit().map_err(StoreError::Transaction)?;
        info!(
            row_count = summary.total_rows(),
            duration_ms = start.elapsed().as_millis(),
            "load committed"
        );
        Ok(summary)
    }

    /// Number of rows currently in `table`.
    pub fn row_count(&self, table: &str) -> Result<usize, StoreError> {
        let def = table_def(table).ok_or_else(|| StoreError::UnknownTable(table.to_string()))?;
        let sql = format!("SELECT COUNT(*) FROM {}", def.name);
        let count: i64 = self
            .connection
            .query_row(&sql, [], |row| row.get(0))
            .map_err(|source| StoreError::Query {
                table: def.name,
                source,
            })?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Rows of one lookup table ordered by key.
    pub fn lookup_values(&self, category: Category) -> Result<Vec<(SurrogateKey, String)>, StoreError> {
        let table = category.table_name();
        let sql = format!(
            "SELECT id, {} FROM {} ORDER BY id",
            category.value_column(),
            table
        );
        let query_error = |source: rusqlite::Error| StoreError::Query { table, source };
        let mut stmt = self.connection.prepare(&sql).map_err(query_error)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))
            .map_err(query_error)?;
        let mut values = Vec::new();
        for row in rows {
            let (id, value) = row.map_err(query_error)?;
            let key = SurrogateKey::try_from(id)
                .map_err(|source| StoreError::InvalidKey { table, source })?;
            values.push((key, value));
        }
        Ok(values)
    }

    /// Borrow the underlying connection for ad hoc queries.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}

fn open_error(path: &Path, source: rusqlite::Error) -> StoreError {
    StoreError::Open {
        path: path.to_path_buf(),
        source,
    }
}

fn create_tables(tx: &Transaction<'_>) -> Result<(), StoreError> {
    for table in &TABLES {
        tx.execute_batch(&table.create_statement())
            .map_err(|source| StoreError::Schema {
                table: table.name,
                source,
            })?;
    }
    Ok(())
}

fn clear_tables(tx: &Transaction<'_>) -> Result<(), StoreError> {
    for table in TABLES.iter().rev() {
        let removed = tx
            .execute(&format!("DELETE FROM {}", table.name), [])
            .map_err(|source| StoreError::Clear {
                table: table.name,
                source,
            })?;
        debug!(table = table.name, removed, "cleared table");
    }
    Ok(())
}

fn insert_lookup(tx: &Transaction<'_>, lookup: &LookupTable) -> Result<usize, StoreError> {
    let table = lookup.category.table_name();
    let sql = format!(
        "INSERT INTO {table} (id, {}) VALUES (?1, ?2)",
        lookup.category.value_column()
    );
    let mut stmt = tx.prepare(&sql).map_err(|source| StoreError::Insert {
        table,
        key: String::new(),
        source,
    })?;
    for row in &lookup.rows {
        stmt.execute(params![i64::from(row.key), row.value])
            .map_err(|source| StoreError::Insert {
                table,
                key: row.key.to_string(),
                source,
            })?;
    }
    debug!(table, row_count = lookup.rows.len(), "inserted lookup rows");
    Ok(lookup.rows.len())
}

fn insert_animals(tx: &Transaction<'_>, animals: &[AnimalEntity]) -> Result<usize, StoreError> {
    let mut stmt = tx.prepare(INSERT_ANIMAL).map_err(|source| StoreError::Insert {
        table: ANIMALS,
        key: String::new(),
        source,
    })?;
    for animal in animals {
        stmt.execute(params![
            animal.id,
            i64::from(animal.type_key),
            animal.name,
            i64::from(animal.breed_key),
            i64::from(animal.color1_key),
            animal.color2_key.map(i64::from),
            non_empty(&animal.date_of_birth),
        ])
        .map_err(|source| StoreError::Insert {
            table: ANIMALS,
            key: animal.id.clone(),
            source,
        })?;
    }
    debug!(row_count = animals.len(), "inserted animals");
    Ok(animals.len())
}

fn insert_shelter(tx: &Transaction<'_>, shelter: &[ShelterEntity]) -> Result<usize, StoreError> {
    let mut stmt = tx.prepare(INSERT_SHELTER).map_err(|source| StoreError::Insert {
        table: SHELTER,
        key: String::new(),
        source,
    })?;
    for outcome in shelter {
        stmt.execute(params![
            outcome.index,
            outcome.animal_id,
            outcome.outcome_subtype_key.map(i64::from),
            non_empty(&outcome.outcome_month),
            non_empty(&outcome.outcome_year),
            outcome.outcome_type_key.map(i64::from),
            outcome.age_upon_outcome,
        ])
        .map_err(|source| StoreError::Insert {
            table: SHELTER,
            key: outcome.index.clone(),
            source,
        })?;
    }
    debug!(row_count = shelter.len(), "inserted shelter rows");
    Ok(shelter.len())
}

/// Typed columns take NULL rather than an empty string.
fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
