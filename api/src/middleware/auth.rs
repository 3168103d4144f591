//! JWT authentication middleware.
//!
//! This middleware extracts JWT tokens from the Authorization header,
//! resolves them through the [`TokenResolver`] registered as app data, and
//! injects an [`AuthContext`] into the request extensions.
//!
//! The middleware works in two modes:
//! 1. Optional mode: requests without a valid token pass through anonymously
//!    and the facade decides whether the operation needs a caller
//! 2. Required mode: requests without a valid token are rejected with 401

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use hb_core::domain::value_objects::Actor;
use hb_core::errors::DomainError;
use hb_core::services::TokenResolver;

use crate::handlers::ApiError;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl AuthContext {
    /// Context for a resolved caller; `None` for anonymous
    pub fn from_actor(actor: Actor) -> Option<Self> {
        match actor {
            Actor::User { id, is_admin } => Some(Self {
                user_id: id,
                is_admin,
            }),
            Actor::Anonymous => None,
        }
    }

    pub fn actor(&self) -> Actor {
        Actor::User {
            id: self.user_id,
            is_admin: self.is_admin,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy)]
pub struct JwtAuth {
    required: bool,
}

impl JwtAuth {
    /// Resolve a token when one is presented, never reject
    pub fn optional() -> Self {
        Self { required: false }
    }

    /// Reject requests without a valid bearer token
    pub fn required() -> Self {
        Self { required: true }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::optional()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            required: self.required,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    required: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let required = self.required;

        Box::pin(async move {
            // An outer optional layer may already have resolved the caller
            let already_resolved = req.extensions().get::<AuthContext>().is_some();

            if !already_resolved {
                if let Some(context) = authenticate(&req) {
                    req.extensions_mut().insert(context);
                } else if required {
                    return Err(ApiError(DomainError::Unauthenticated).into());
                }
            }

            service.call(req).await
        })
    }
}

/// Resolve the bearer token of a request, if it carries a valid one
fn authenticate(req: &ServiceRequest) -> Option<AuthContext> {
    let token = extract_bearer_token(req)?;

    let Some(resolver) = req.app_data::<web::Data<dyn TokenResolver>>() else {
        log::error!("No TokenResolver is registered as app data");
        return None;
    };

    match resolver.resolve(&token) {
        Ok(actor) => AuthContext::from_actor(actor),
        Err(e) => {
            log::debug!("Ignoring bearer token on {}: {}", req.path(), e);
            None
        }
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or(ApiError(DomainError::Unauthenticated));

        ready(result)
    }
}

/// Extractor for optional authentication
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthContext>);

impl OptionalAuth {
    /// The caller as seen by the facade
    pub fn actor(&self) -> Actor {
        self.0.as_ref().map(AuthContext::actor).unwrap_or_default()
    }
}

impl FromRequest for OptionalAuth {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}
