use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use cinemate_core::domain::users::auth::{
    AuthenticatedUser, AuthenticationError,
};
use tracing::{debug, error};

use crate::infra::{app_state::AppState, errors::AppError};

/// Resolve the bearer token to an [`AuthenticatedUser`] request extension.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;

    let session = state
        .auth_service()
        .validate_session_token(&token)
        .await
        .map_err(map_authentication_error)?;

    let user = state
        .unit_of_work()
        .users
        .get_user_by_id(session.user_id)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to load session user");
            AppError::internal("Database operation failed")
        })?
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        session_id: session.session_id,
    });

    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}

fn map_authentication_error(err: AuthenticationError) -> AppError {
    match err {
        AuthenticationError::SessionExpired
        | AuthenticationError::UserNotFound
        | AuthenticationError::InvalidLifetime => {
            debug!(error = %err, "bearer token rejected");
            AppError::unauthorized("Invalid or expired session")
        }
        AuthenticationError::Crypto(_)
        | AuthenticationError::DatabaseError(_) => {
            error!(error = %err, "session validation failed");
            AppError::internal("Database operation failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    fn request_with(value: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn bearer_token_is_extracted() {
        let token = extract_bearer_token(&request_with(Some("Bearer abc")));
        assert_eq!(token.unwrap(), "abc");
    }

    #[test]
    fn missing_or_foreign_schemes_are_unauthorized() {
        for value in [None, Some("Basic abc"), Some("Bearer "), Some("abc")] {
            let err = extract_bearer_token(&request_with(value)).unwrap_err();
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        }
    }
}
