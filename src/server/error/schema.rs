use thiserror::Error;

/// Mismatches between the game server's `account` table and what the dashboard expects.
///
/// Raised during startup only. The dashboard never creates the `account` table, so any
/// of these aborts the boot instead of serving requests against an unknown schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The table does not exist in the configured database.
    #[error("Table '{0}' does not exist; point the dashboard at the game server database")]
    MissingTable(String),

    /// The table exists but lacks columns the dashboard reads.
    #[error("Table '{table}' is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Table that was inspected
        table: String,
        /// Names of every missing column
        columns: Vec<String>,
    },
}
