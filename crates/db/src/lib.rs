//! Persistence for Ventureboard: a single SQLite database file.
//!
//! The schema ships inside the binary ([`SCHEMA`]). [`open_database`]
//! creates and initializes the file on first run and simply opens it
//! afterwards.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Bundled schema script, executed once when the database file is created.
pub const SCHEMA: &str = include_str!("../migrations/0001_init.sql");

/// Failure while opening or initializing the database file.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to remove partially initialized database {path}: {source}")]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Create a connection pool for the database file at `path`, creating an
/// empty file if none exists. Foreign keys are enforced on every connection.
pub async fn create_pool(path: &Path) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Open the database at `path`, initializing it from [`SCHEMA`] if the file
/// does not exist yet.
pub async fn open_database(path: &Path) -> Result<DbPool, InitError> {
    open_database_with_schema(path, SCHEMA).await
}

/// Like [`open_database`], with an explicit schema script.
///
/// If the file is absent it is created and `schema` executed. When that
/// fails the partially-created file is deleted before the error is
/// returned, so the next start tries again from scratch.
pub async fn open_database_with_schema(path: &Path, schema: &str) -> Result<DbPool, InitError> {
    if path.exists() {
        return Ok(create_pool(path).await?);
    }

    tracing::info!(path = %path.display(), "Database file not found, creating and initializing");
    match initialize(path, schema).await {
        Ok(pool) => {
            tracing::info!(path = %path.display(), "Database initialized");
            Ok(pool)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "Database initialization failed");
            remove_partial(path)?;
            Err(err.into())
        }
    }
}

async fn initialize(path: &Path, schema: &str) -> Result<DbPool, sqlx::Error> {
    let pool = create_pool(path).await?;
    if let Err(err) = sqlx::raw_sql(schema).execute(&pool).await {
        pool.close().await;
        return Err(err);
    }
    Ok(pool)
}

/// Remove a half-initialized database file and any SQLite sidecar files.
fn remove_partial(path: &Path) -> Result<(), InitError> {
    if path.exists() {
        std::fs::remove_file(path).map_err(|source| InitError::Cleanup {
            path: path.to_path_buf(),
            source,
        })?;
    }
    for suffix in ["-journal", "-wal", "-shm"] {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(suffix);
        let _ = std::fs::remove_file(PathBuf::from(sidecar));
    }
    Ok(())
}
