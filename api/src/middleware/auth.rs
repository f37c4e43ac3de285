//! Session cookie authentication and role gating for protected routes.
//!
//! [`SessionAuth`] reads the `token` cookie, verifies it with the core
//! `TokenService` and places a [`SessionContext`] in the request extensions.
//! [`RequireRole`] runs inside it and rejects sessions with the wrong role.
//! Both reply with an `ErrorResponse` body instead of calling the handler.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use cv_core::{
    domain::entities::{Role, SessionClaims},
    errors::{AuthError, DomainError, ValidationError},
    services::{authorize, TokenService},
};
use cv_shared::SESSION_COOKIE_NAME;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use crate::handlers::error::{handle_domain_error, ApiError};

/// Authenticated session injected into requests by [`SessionAuth`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub claims: SessionClaims,
}

impl SessionContext {
    pub fn username(&self) -> &str {
        &self.claims.username
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }
}

/// Extractor for an authenticated session; fails with 401 outside [`SessionAuth`]
impl FromRequest for SessionContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::MissingSession));

        ready(result)
    }
}

fn reject<B>(req: ServiceRequest, error: DomainError) -> ServiceResponse<EitherBody<B>> {
    let response = handle_domain_error(&error);
    req.into_response(response).map_into_right_body()
}

/// Session cookie authentication middleware factory
#[derive(Clone)]
pub struct SessionAuth {
    token_service: Arc<TokenService>,
}

impl SessionAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Session cookie authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let verified = match req.cookie(SESSION_COOKIE_NAME) {
            Some(cookie) => self.token_service.verify(cookie.value()),
            None => {
                log::debug!("No session cookie on {} {}", req.method(), req.path());
                return Box::pin(async move {
                    Ok(reject(req, AuthError::MissingSession.into()))
                });
            }
        };

        Box::pin(async move {
            match verified {
                Ok(claims) => {
                    req.extensions_mut().insert(SessionContext { claims });
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(e) => {
                    log::info!("Rejected session on {}: {}", req.path(), e);
                    Ok(reject(req, e.into()))
                }
            }
        })
    }
}

/// Role requirement middleware factory, used inside [`SessionAuth`]
#[derive(Debug, Clone, Copy)]
pub struct RequireRole {
    role: Role,
}

impl RequireRole {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Build from a role name, compared case-insensitively
    pub fn parse(role: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(role.parse()?))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            role: self.role,
        }))
    }
}

/// Role requirement middleware service
pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    role: Role,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let decision = {
            let extensions = req.extensions();
            let claims = extensions.get::<SessionContext>().map(|ctx| &ctx.claims);
            let decision = authorize(claims, self.role).map(|_| ());
            decision
        };

        Box::pin(async move {
            match decision {
                Ok(()) => {
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(e) => {
                    log::info!("Role check failed on {}: {}", req.path(), e);
                    Ok(reject(req, e.into()))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_role_parse_is_case_insensitive() {
        assert_eq!(RequireRole::parse("Vendor").unwrap().role, Role::Vendor);
        assert_eq!(RequireRole::parse("vendor").unwrap().role, Role::Vendor);
        assert!(RequireRole::parse("admin").is_err());
    }
}
