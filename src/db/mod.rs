pub mod kv;

pub use kv::SqliteStore;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};

const DB_FILE: &str = "stats.db";

/// Path of the database file inside `data_dir`, creating the directory.
pub fn get_db_path(data_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    Ok(data_dir.join(DB_FILE))
}

/// Create a connection pool to the SQLite database and run migrations
pub async fn create_pool(data_dir: &Path) -> Result<SqlitePool> {
    let db_path = get_db_path(data_dir)?;

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("nested");

        let pool = create_pool(&data_dir).await;

        assert!(pool.is_ok());
        assert!(data_dir.join(DB_FILE).exists());
    }
}
