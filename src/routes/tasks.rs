use crate::{
    auth::AuthenticatedUser,
    db,
    error::AppError,
    models::{CreateTaskRequest, UpdateTaskRequest},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Retrieves the task list for the authenticated user.
///
/// ## Responses:
/// - `200 OK`: `{"tasks_data": [...]}` with the user's tasks, oldest first.
/// - `401 Unauthorized`: no live session.
/// - `500 Internal Server Error`: database failure.
#[get("/get-tasks")]
pub async fn get_tasks(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = db::tasks::get_user_tasks(&pool, user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "tasks_data": tasks })))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Request Body:
/// - `taskName`: title of the task (1–200 characters).
/// - `taskDescription`: free-form description (up to 1000 characters).
///
/// ## Responses:
/// - `200 OK` on success, `400` on invalid input, `401` without a session,
///   `500` when the insert fails.
#[post("/create-task")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    task_data: web::Json<CreateTaskRequest>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let created = db::tasks::create_task(
        &pool,
        user.user_id,
        &task_data.task_name,
        &task_data.task_description,
    )
    .await?;

    if created {
        Ok(HttpResponse::Ok().json(json!({ "message": "Task created successfully" })))
    } else {
        Err(AppError::InternalServerError("Task creation failed".into()))
    }
}

/// Rewrites a task's name and description.
///
/// ## Request Body:
/// - `updatedTaskName`, `updatedTaskDesc`: the replacement values.
///
/// ## Responses:
/// - `200 OK` on success, `400` on invalid input, `401` without a session,
///   `500` when no task with that id exists or the update fails.
#[put("/update-task/{task_id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    _user: AuthenticatedUser,
    task_id: web::Path<i32>,
    task_data: web::Json<UpdateTaskRequest>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let updated = db::tasks::update_task(
        &pool,
        task_id.into_inner(),
        &task_data.name,
        &task_data.description,
    )
    .await?;

    if updated {
        Ok(HttpResponse::Ok().json(json!({ "message": "Task updated successfully" })))
    } else {
        Err(AppError::InternalServerError("Task update failed".into()))
    }
}

/// Deletes a task by id. Gated by the session like its siblings.
#[delete("/delete-task/{task_id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    _user: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let deleted = db::tasks::delete_task_by_id(&pool, task_id.into_inner()).await?;

    if deleted {
        Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted" })))
    } else {
        Err(AppError::InternalServerError(
            "Error in deleting task".into(),
        ))
    }
}

/// Fetches one task's name and description by id.
///
/// ## Responses:
/// - `200 OK`: `{"task_data": {"name": ..., "description": ...}}`.
/// - `401 Unauthorized`: no live session.
/// - `500 Internal Server Error`: no task with that id, or database failure.
#[get("/get-task/{task_id}")]
pub async fn get_task(
    pool: web::Data<PgPool>,
    _user: AuthenticatedUser,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = db::tasks::get_task_info(&pool, task_id.into_inner()).await?;

    match task {
        Some(task_data) => Ok(HttpResponse::Ok().json(json!({ "task_data": task_data }))),
        None => Err(AppError::InternalServerError("Task retrieval failed".into())),
    }
}
