//! Database pool management and schema bootstrapping.

use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

/// Schema script executed by the `init-db` subcommand and the test harness.
static SCHEMA_SQL: &str = include_str!("schema.sql");

/// Connect the global pool. Panics on connection failure since nothing can
/// run without a database.
pub async fn init_db(database_url: String) {
    let pool = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    if DB_POOL.set(pool).is_err() {
        log::debug!("init_db: pool already initialized");
    }
}

pub fn get_db_pool() -> &'static DatabaseConnection {
    DB_POOL.get().expect("Database pool is not initialized.")
}

/// Run the schema script, dropping and recreating all tables with seed data.
///
/// The script is split on semicolons, so seed strings must not contain one.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for stmt in SCHEMA_SQL.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        db.execute(Statement::from_string(backend, stmt.to_owned()))
            .await?;
    }

    Ok(())
}
