use crate::{
    auth::{hash_password, AuthenticatedUser, LoginRequest, SignupRequest},
    db,
    error::AppError,
    session::{removal_cookie, session_cookie, SessionStore, SESSION_COOKIE},
};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::info;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Reports whether the caller has a live session.
///
/// Unlike the other gated endpoints this one always answers with an
/// `isLoggedIn` body, so the client can poll it to drive its UI state.
#[get("/check-session")]
pub async fn check_session(user: Option<AuthenticatedUser>) -> impl Responder {
    match user {
        Some(_) => HttpResponse::Ok().json(json!({ "isLoggedIn": true })),
        None => HttpResponse::Unauthorized().json(json!({ "isLoggedIn": false })),
    }
}

/// Returns the username for the session's user, read back from the store.
#[get("/get-username")]
pub async fn get_username(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let username = db::users::get_username(&pool, user.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({ "username": username })))
}

/// Login user
///
/// Verifies the credential pair, creates a session, and sets the session
/// cookie. A mismatch on either username or password yields the same 401.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    store: web::Data<SessionStore>,
    credentials: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    credentials.validate()?;

    let user_exists =
        db::users::check_user_existence(&pool, &credentials.username, &credentials.password)
            .await?;

    if !user_exists {
        return Err(AppError::Unauthorized(
            "Invalid username or password".into(),
        ));
    }

    let user_id = db::users::get_user_id(&pool, &credentials.username)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError("User id lookup failed after login".into())
        })?;

    let session_id = store.create(user_id, &credentials.username);
    info!("User {} logged in", credentials.username);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(session_id, store.ttl()))
        .json(json!({ "isLoggedIn": true })))
}

/// Sign up a new user
///
/// Creates the account with a hashed password, then establishes a session
/// exactly as login does.
#[post("/signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    store: web::Data<SessionStore>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    signup_data.validate()?;

    // Usernames are unique; reject duplicates before inserting.
    if db::users::get_user_id(&pool, &signup_data.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Username already taken".into()));
    }

    let password_hash = hash_password(&signup_data.password)?;

    let user_created = db::users::create_new_user(
        &pool,
        &signup_data.username,
        &signup_data.email,
        &password_hash,
    )
    .await?;

    if !user_created {
        return Err(AppError::BadRequest("Error creating user".into()));
    }

    let user_id = db::users::get_user_id(&pool, &signup_data.username)
        .await?
        .ok_or_else(|| {
            AppError::InternalServerError("User id lookup failed after signup".into())
        })?;

    let session_id = store.create(user_id, &signup_data.username);
    info!("User {} signed up", signup_data.username);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(session_id, store.ttl()))
        .json(json!({ "isLoggedIn": true })))
}

/// Destroys the caller's session, if any, and clears the cookie.
#[post("/logout")]
pub async fn logout(
    store: web::Data<SessionStore>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Ok(session_id) = Uuid::parse_str(cookie.value()) {
            store.destroy(session_id);
        }
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(json!({ "message": "Logged out successfully" })))
}
