use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;
use crate::session::{SessionStore, SESSION_COOKIE};

/// Extracts the authenticated user from the session cookie.
///
/// Handlers that take this extractor are gated: a request without a
/// `user-session` cookie naming a live session is rejected with 401 before
/// the handler body runs, so no database work happens for anonymous callers.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError; // AppError converts into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = match req.app_data::<web::Data<SessionStore>>() {
            Some(store) => store,
            None => {
                // The store is registered at app construction; reaching this
                // arm means the server was wired up incorrectly.
                let err =
                    AppError::InternalServerError("Session store not configured".to_string());
                return ready(Err(err.into()));
            }
        };

        let session = req
            .cookie(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .and_then(|id| store.get(id));

        match session {
            Some(data) => ready(Ok(AuthenticatedUser {
                user_id: data.user_id,
                username: data.username,
            })),
            None => {
                let err = AppError::Unauthorized("Not logged in".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::session_cookie;
    use actix_web::dev::Payload;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::Duration;

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_success() {
        let store = web::Data::new(SessionStore::new(Duration::hours(1)));
        let id = store.create(123, "alice");

        let req = test::TestRequest::default()
            .app_data(store.clone())
            .cookie(session_cookie(id, Duration::hours(1)))
            .to_http_request();

        let mut payload = Payload::None;
        let user = AuthenticatedUser::from_request(&req, &mut payload)
            .await
            .expect("extraction should succeed");
        assert_eq!(user.user_id, 123);
        assert_eq!(user.username, "alice");
    }

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_missing_cookie() {
        let store = web::Data::new(SessionStore::new(Duration::hours(1)));

        let req = test::TestRequest::default()
            .app_data(store)
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert!(result.is_err());

        let response = result.unwrap_err().error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_authenticated_user_extractor_unknown_session() {
        let store = web::Data::new(SessionStore::new(Duration::hours(1)));

        let req = test::TestRequest::default()
            .app_data(store)
            .cookie(session_cookie(Uuid::new_v4(), Duration::hours(1)))
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert!(result.is_err());

        let response = result.unwrap_err().error_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
