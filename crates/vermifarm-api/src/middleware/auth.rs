//! Session authentication middleware
//!
//! This middleware:
//! 1. Extracts the Authorization header from HTTP requests
//! 2. Validates the Bearer session token against the session store, which
//!    also registers activity on the session (pushing the idle deadline out)
//! 3. Attaches the authenticated [`Session`] to request extensions
//! 4. Returns 401 Unauthorized on authentication failures
//!
//! Protected endpoints read the session from extensions:
//!
//! ```rust,ignore
//! let session = req.extensions().get::<Session>().cloned();
//! ```

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use log::warn;
use serde_json::json;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use vermifarm_auth::{AuthError, AuthService, Session};

use crate::helpers::generate_request_id;

/// Session authentication middleware factory.
pub struct SessionAuth {
    auth: Arc<AuthService>,
}

impl SessionAuth {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthService {
            service: Rc::new(service),
            auth: self.auth.clone(),
        }))
    }
}

/// Session authentication middleware service instance.
pub struct SessionAuthService<S> {
    service: Rc<S>,
    auth: Arc<AuthService>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let auth = self.auth.clone();

        Box::pin(async move {
            let token = match bearer_token(&req) {
                Ok(token) => token,
                Err(err) => {
                    let request_id = generate_request_id();
                    warn!("Rejected request: {} (request_id={})", err, request_id);
                    let (req, _) = req.into_parts();
                    let response = HttpResponse::Unauthorized()
                        .json(json!({
                            "error": "unauthorized",
                            "message": err.to_string(),
                            "request_id": request_id,
                        }))
                        .map_into_right_body();
                    return Ok(ServiceResponse::new(req, response));
                }
            };

            match auth.authenticate_session(&token) {
                Ok(session) => {
                    req.extensions_mut().insert::<Session>(session);
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Err(err) => {
                    let request_id = generate_request_id();
                    warn!("Session rejected: {} (request_id={})", err, request_id);
                    let (req, _) = req.into_parts();
                    let response = HttpResponse::Unauthorized()
                        .json(json!({
                            "error": "session_expired",
                            "message": "Session is invalid or has expired",
                            "request_id": request_id,
                        }))
                        .map_into_right_body();
                    Ok(ServiceResponse::new(req, response))
                }
            }
        })
    }
}

/// Pull the Bearer token out of the Authorization header.
fn bearer_token(req: &ServiceRequest) -> Result<String, AuthError> {
    let header = req
        .headers()
        .get("Authorization")
        .ok_or(AuthError::MissingAuthorization)?;
    let value = header.to_str().map_err(|_| {
        AuthError::MalformedAuthorization("header contains invalid characters".to_string())
    })?;
    let token = value
        .strip_prefix("Bearer")
        .ok_or_else(|| AuthError::MalformedAuthorization("expected the Bearer scheme".to_string()))?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MalformedAuthorization(
            "Bearer token missing".to_string(),
        ));
    }
    Ok(token.to_string())
}
