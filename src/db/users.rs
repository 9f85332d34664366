use sqlx::PgPool;

use crate::auth::verify_password;
use crate::db::{acquire, query_error};
use crate::error::AppError;

/// Returns true when a user row with the given username exists and the
/// supplied password matches its stored hash. Unknown usernames and wrong
/// passwords both come back as false.
pub async fn check_user_existence(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<bool, AppError> {
    let mut conn = acquire(pool).await?;

    let row: Option<(String,)> =
        sqlx::query_as("SELECT password_hash FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&mut *conn)
            .await
            .map_err(query_error)?;

    match row {
        Some((password_hash,)) => verify_password(password, &password_hash),
        None => Ok(false),
    }
}

/// Looks up a user's id by username.
pub async fn get_user_id(pool: &PgPool, username: &str) -> Result<Option<i32>, AppError> {
    let mut conn = acquire(pool).await?;

    let row: Option<(i32,)> = sqlx::query_as("SELECT user_id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(query_error)?;

    Ok(row.map(|(user_id,)| user_id))
}

/// Looks up a username by user id.
pub async fn get_username(pool: &PgPool, user_id: i32) -> Result<Option<String>, AppError> {
    let mut conn = acquire(pool).await?;

    let row: Option<(String,)> = sqlx::query_as("SELECT username FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(query_error)?;

    Ok(row.map(|(username,)| username))
}

/// Inserts a new user row. The password arrives pre-hashed; this layer never
/// sees plaintext storage.
pub async fn create_new_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<bool, AppError> {
    let mut conn = acquire(pool).await?;

    let result = sqlx::query("INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3)")
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(&mut *conn)
        .await
        .map_err(query_error)?;

    Ok(result.rows_affected() == 1)
}
