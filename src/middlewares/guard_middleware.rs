//! 라우트 가드 미들웨어
//!
//! 모든 요청에 [`RouteGuard`]를 적용합니다. 가드 판정은 요청 경로,
//! 토큰 쿠키, 현재 시각만으로 이루어지며 외부 호출이 없습니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::GuardConfig;
use crate::middlewares::guard_inner::GuardMiddlewareService;
use crate::services::guard::RouteGuard;

/// 라우트 가드 미들웨어
///
/// ```rust,ignore
/// let config = Arc::new(GuardConfig::from_env()?);
///
/// App::new()
///     .wrap(GuardMiddleware::new(config.clone()))
///     .configure(configure_all_routes)
/// ```
pub struct GuardMiddleware {
    guard: RouteGuard,
}

impl GuardMiddleware {
    pub fn new(config: Arc<GuardConfig>) -> Self {
        Self {
            guard: RouteGuard::new(config),
        }
    }
}

impl Default for GuardMiddleware {
    fn default() -> Self {
        Self::new(Arc::new(GuardConfig::default()))
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for GuardMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = GuardMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GuardMiddlewareService {
            service: Rc::new(service),
            guard: self.guard.clone(),
        }))
    }
}
