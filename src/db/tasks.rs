use sqlx::PgPool;

use crate::db::{acquire, query_error};
use crate::error::AppError;
use crate::models::{Task, TaskInfo};

/// Fetches every task owned by the given user, oldest first.
pub async fn get_user_tasks(pool: &PgPool, user_id: i32) -> Result<Vec<Task>, AppError> {
    let mut conn = acquire(pool).await?;

    sqlx::query_as::<_, Task>(
        "SELECT task_id, name, description FROM tasks WHERE user_id = $1 ORDER BY task_id",
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(query_error)
}

/// Inserts a task for the given user.
pub async fn create_task(
    pool: &PgPool,
    user_id: i32,
    name: &str,
    description: &str,
) -> Result<bool, AppError> {
    let mut conn = acquire(pool).await?;

    let result = sqlx::query("INSERT INTO tasks (user_id, name, description) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(name)
        .bind(description)
        .execute(&mut *conn)
        .await
        .map_err(query_error)?;

    Ok(result.rows_affected() == 1)
}

/// Rewrites a task's name and description. Returns false when no row with
/// that id exists.
pub async fn update_task(
    pool: &PgPool,
    task_id: i32,
    name: &str,
    description: &str,
) -> Result<bool, AppError> {
    let mut conn = acquire(pool).await?;

    let result = sqlx::query("UPDATE tasks SET name = $1, description = $2 WHERE task_id = $3")
        .bind(name)
        .bind(description)
        .bind(task_id)
        .execute(&mut *conn)
        .await
        .map_err(query_error)?;

    Ok(result.rows_affected() > 0)
}

/// Fetches one task's name and description by id.
pub async fn get_task_info(pool: &PgPool, task_id: i32) -> Result<Option<TaskInfo>, AppError> {
    let mut conn = acquire(pool).await?;

    sqlx::query_as::<_, TaskInfo>("SELECT name, description FROM tasks WHERE task_id = $1")
        .bind(task_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(query_error)
}

/// Deletes a task by id. Returns false when no row with that id exists.
pub async fn delete_task_by_id(pool: &PgPool, task_id: i32) -> Result<bool, AppError> {
    let mut conn = acquire(pool).await?;

    let result = sqlx::query("DELETE FROM tasks WHERE task_id = $1")
        .bind(task_id)
        .execute(&mut *conn)
        .await
        .map_err(query_error)?;

    Ok(result.rows_affected() > 0)
}
