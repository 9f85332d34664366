//!
//! # Data Access Layer
//!
//! A bounded connection pool plus one function per database operation. Every
//! operation acquires a pooled connection, executes exactly one parameterized
//! statement, and returns the connection to the pool when it drops. Pool
//! acquisition failures surface as `AppError::ConnectionError`, statement
//! failures as `AppError::QueryError`; parameters are always bound values,
//! never spliced into the statement text.

pub mod tasks;
pub mod users;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{PgPool, Postgres};

use crate::config::Config;
use crate::error::AppError;
use crate::secrets::DbCredentials;

/// Builds the connection pool from the static server/database identifiers
/// and the credential pair retrieved from the vault. TLS is required, as the
/// target database only accepts encrypted sessions.
pub async fn build_pool(config: &Config, credentials: &DbCredentials) -> Result<PgPool, AppError> {
    let options = connect_options(config, credentials);

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .map_err(|e| AppError::ConnectionError(format!("Failed to connect to database: {}", e)))
}

fn connect_options(config: &Config, credentials: &DbCredentials) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.db_host)
        .database(&config.db_name)
        .username(&credentials.username)
        .password(&credentials.password)
        .ssl_mode(PgSslMode::Require)
}

pub(crate) async fn acquire(pool: &PgPool) -> Result<PoolConnection<Postgres>, AppError> {
    pool.acquire()
        .await
        .map_err(|e| AppError::ConnectionError(format!("Failed to acquire connection: {}", e)))
}

pub(crate) fn query_error(error: sqlx::Error) -> AppError {
    AppError::QueryError(error.to_string())
}
