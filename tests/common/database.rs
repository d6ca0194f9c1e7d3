//! Test database setup and management
#![allow(dead_code)]

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};
use std::env;
use std::sync::Once;

static INIT_SYNC: Once = Once::new();

/// Initialize synchronous global state (config, session store)
fn init_sync_globals() {
    INIT_SYNC.call_once(|| {
        storefront::app_config::init();
        storefront::session::init();
    });
}

/// Initialize async global state (DB pool + schema)
/// Must be called from an async context
async fn init_async_globals() {
    // Ensure sync globals are initialized first
    init_sync_globals();

    // We can't use the regular Once::call_once because it's not async-friendly
    use std::sync::atomic::{AtomicBool, Ordering};
    static DB_INITIALIZED: AtomicBool = AtomicBool::new(false);

    if !DB_INITIALIZED.swap(true, Ordering::SeqCst) {
        let database_url = env::var("TEST_DATABASE_URL").unwrap_or_else(|_| {
            // Temp-file database private to this test binary. A shared-cache
            // in-memory database does not survive across the per-test
            // runtimes, which drop the pool's connections between tests.
            let path = std::env::temp_dir().join(format!(
                "storefront_test_{}.db",
                std::process::id()
            ));
            format!("sqlite://{}?mode=rwc", path.display())
        });

        storefront::db::init_db(database_url).await;
        storefront::db::init_schema(storefront::db::get_db_pool())
            .await
            .expect("Failed to run schema script");
    }
}

/// Setup test database - initialize globals and return the pool
pub async fn setup_test_database() -> &'static DatabaseConnection {
    init_async_globals().await;
    storefront::db::get_db_pool()
}

/// Cleanup function to remove test data
///
/// Deletes all rows, including seed data from the schema script, so each
/// test starts from an empty database.
pub async fn cleanup_test_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for table in [
        "promotions",
        "transaction_log",
        "orders",
        "products",
        "feature_flags",
        "users",
    ] {
        db.execute(Statement::from_string(
            backend,
            format!("DELETE FROM {}", table),
        ))
        .await?;
    }

    // In-process state outlives database resets
    storefront::cache::invalidate_product_listing();
    storefront::cache::invalidate_transactions();
    storefront::metrics::reset();

    Ok(())
}
