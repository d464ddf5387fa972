#![cfg(all(test, feature = "seaorm"))]
use tokio::sync::OnceCell;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use models::{account, catalog_item, db::connect_with_config};

// Ensure tables are created only once across the entire test process
static SCHEMA: OnceCell<()> = OnceCell::const_new();

fn test_config() -> configs::DatabaseConfig {
    let mut cfg = configs::load_default().map(|c| c.database).unwrap_or_default();
    cfg.normalize_from_env();
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.clamp(1, cfg.max_connections);
    cfg
}

/// Connection for DB-backed tests, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }

    SCHEMA
        .get_or_init(|| async {
            let db = connect_with_config(&test_config()).await.expect("connect db for schema");
            let backend = db.get_database_backend();
            let schema = Schema::new(backend);
            for mut stmt in [
                schema.create_table_from_entity(account::Entity),
                schema.create_table_from_entity(catalog_item::Entity),
            ] {
                stmt.if_not_exists();
                db.execute(backend.build(&stmt)).await.expect("create table");
            }
            drop(db);
        })
        .await;

    // Fresh connection bound to the current test's runtime
    let db = connect_with_config(&test_config()).await?;
    Ok(Some(db))
}
