use actix_web::{test, web, App};
use chrono::Duration;
use serde_json::json;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use taskvault::routes;
use taskvault::session::{session_cookie, SessionStore};

// A pool that never connects. Handlers that are properly session gated
// reject anonymous requests before touching it; if a gate were missing, the
// request would surface a 500 connection failure instead of the asserted
// 401, so these tests double as proof that no database call happens.
fn lazy_pool() -> PgPool {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .database("unreachable");

    PgPoolOptions::new().connect_lazy_with(options)
}

fn session_store(ttl: Duration) -> web::Data<SessionStore> {
    web::Data::new(SessionStore::new(ttl))
}

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(lazy_pool()))
                .app_data($store.clone())
                .configure(routes::config),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_check_session_without_login() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/check-session").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "isLoggedIn": false }));
}

#[actix_rt::test]
async fn test_task_endpoints_require_login() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let get_tasks = test::TestRequest::get().uri("/get-tasks").to_request();
    assert_eq!(test::call_service(&app, get_tasks).await.status(), 401);

    let get_username = test::TestRequest::get().uri("/get-username").to_request();
    assert_eq!(test::call_service(&app, get_username).await.status(), 401);

    let create = test::TestRequest::post()
        .uri("/create-task")
        .set_json(json!({ "taskName": "Groceries", "taskDescription": "Milk" }))
        .to_request();
    assert_eq!(test::call_service(&app, create).await.status(), 401);

    let update = test::TestRequest::put()
        .uri("/update-task/1")
        .set_json(json!({ "updatedTaskName": "Groceries", "updatedTaskDesc": "Milk" }))
        .to_request();
    assert_eq!(test::call_service(&app, update).await.status(), 401);

    // The delete endpoint is gated like its siblings.
    let delete = test::TestRequest::delete()
        .uri("/delete-task/1")
        .to_request();
    assert_eq!(test::call_service(&app, delete).await.status(), 401);

    let get_task = test::TestRequest::get().uri("/get-task/1").to_request();
    assert_eq!(test::call_service(&app, get_task).await.status(), 401);
}

#[actix_rt::test]
async fn test_check_session_with_live_session() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let session_id = store.create(42, "alice");
    let req = test::TestRequest::get()
        .uri("/check-session")
        .cookie(session_cookie(session_id, store.ttl()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "isLoggedIn": true }));
}

#[actix_rt::test]
async fn test_expired_session_is_rejected() {
    let store = session_store(Duration::seconds(-1));
    let app = init_app!(store);

    let session_id = store.create(42, "alice");
    let req = test::TestRequest::get()
        .uri("/get-tasks")
        .cookie(session_cookie(session_id, Duration::hours(1)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn test_logout_destroys_session() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let session_id = store.create(42, "alice");
    let cookie = session_cookie(session_id, store.ttl());

    let logout = test::TestRequest::post()
        .uri("/logout")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, logout).await;
    assert_eq!(resp.status(), 200);

    // The response clears the client's cookie.
    let removal = resp
        .response()
        .cookies()
        .find(|c| c.name() == "user-session")
        .expect("logout should send a session cookie");
    assert_eq!(removal.value(), "");

    // The server-side entry is gone, so the old cookie no longer works.
    assert!(store.get(session_id).is_none());
    let check = test::TestRequest::get()
        .uri("/check-session")
        .cookie(cookie)
        .to_request();
    assert_eq!(test::call_service(&app, check).await.status(), 401);
}

#[actix_rt::test]
async fn test_logout_without_session_is_ok() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
}

#[actix_rt::test]
async fn test_create_task_with_invalid_payload_is_bad_request() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let session_id = store.create(42, "alice");
    let req = test::TestRequest::post()
        .uri("/create-task")
        .cookie(session_cookie(session_id, store.ttl()))
        .set_json(json!({ "taskName": "", "taskDescription": "Milk" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Validation fails before any database work.
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_signup_with_invalid_payload_is_bad_request() {
    let store = session_store(Duration::hours(1));
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/signup")
        .set_json(json!({
            "username": "bad user!",
            "email": "not-an-email",
            "password": "short"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}
