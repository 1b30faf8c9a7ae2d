use std::future::Future;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, max_connections, DbKind, DbProfile};
use crate::error::AppError;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a pool for the given profile and backend.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, kind)?;
    let pool_max = max_connections(kind)?;

    let mut opt = ConnectOptions::new(url);
    opt.min_connections(1)
        .max_connections(pool_max)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = match kind {
        // Postgres may still be starting alongside the service.
        DbKind::Postgres => {
            retry_connection(
                || async { Database::connect(opt.clone()).await.map_err(AppError::from) },
                5,
                500,
            )
            .await?
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => Database::connect(opt).await?,
    };

    info!(db_kind = %kind, pool_max, "database connected");
    Ok(conn)
}

/// Single entrypoint for services and tests: connect, then migrate up.
pub async fn bootstrap_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, kind).await?;
    migration::migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
