use crate::config::DatabaseConfig;
use crate::db::schema;
use crate::error::PawbookError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult, SqliteRow,
};
use sqlx::{FromRow, Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, error, info};

pub type SqlitePool = Pool<Sqlite>;

/// Build the connection pool described by `cfg`.
///
/// The database file is created if it does not exist yet. The connect timeout
/// bounds both pool acquisition and SQLite's busy wait.
pub async fn connect(cfg: &DatabaseConfig) -> Result<SqlitePool, PawbookError> {
    let timeout = cfg.connect_timeout();
    let connect_opts = SqliteConnectOptions::from_str(cfg.url.as_str())?
        .create_if_missing(true)
        .busy_timeout(timeout);
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(timeout)
        .connect_with(connect_opts)
        .await
        .inspect_err(|e| error!(url = %cfg.url, error = %e, "database connect failed"))?;
    info!(
        url = %cfg.url,
        max_connections = cfg.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Data-access handle over the `user`, `auth` and `token` tables.
///
/// Every public operation runs exactly one statement through [`PawStore::execute`]
/// or [`PawStore::fetch_optional`]; a pooled connection is held only for the
/// duration of that statement.
#[derive(Clone)]
pub struct PawStore {
    pool: SqlitePool,
}

impl PawStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect and bootstrap the schema in one step.
    pub async fn open(cfg: &DatabaseConfig) -> Result<Self, PawbookError> {
        let store = Self::new(connect(cfg).await?);
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    pub async fn init_schema(&self) -> Result<(), PawbookError> {
        for stmt in schema::statements() {
            self.execute("init_schema", sqlx::query(stmt)).await?;
        }
        info!("database schema ready");
        Ok(())
    }

    /// Run one statement that returns no rows. Failures are logged under `op`
    /// and returned to the caller.
    pub(crate) async fn execute<'q>(
        &self,
        op: &'static str,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Result<SqliteQueryResult, PawbookError> {
        match query.execute(&self.pool).await {
            Ok(res) => {
                debug!(op, rows = res.rows_affected(), "statement executed");
                Ok(res)
            }
            Err(e) => {
                error!(op, error = %e, "statement failed");
                Err(e.into())
            }
        }
    }

    /// Run one query returning at most one row. `Ok(None)` means no row matched.
    pub(crate) async fn fetch_optional<'q, O>(
        &self,
        op: &'static str,
        query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    ) -> Result<Option<O>, PawbookError>
    where
        O: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
    {
        match query.fetch_optional(&self.pool).await {
            Ok(row) => {
                debug!(op, found = row.is_some(), "query executed");
                Ok(row)
            }
            Err(e) => {
                error!(op, error = %e, "query failed");
                Err(e.into())
            }
        }
    }
}

/// Success criterion shared by every single-row mutation.
pub(crate) fn exactly_one(res: &SqliteQueryResult) -> bool {
    res.rows_affected() == 1
}
