//! GuardMiddleware 판정 적용 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::LOCATION;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::{CredentialToken, GuardDecision};
use crate::services::guard::RouteGuard;

/// 실제 가드 판정을 수행하는 서비스
pub struct GuardMiddlewareService<S> {
    pub service: Rc<S>,
    pub guard: RouteGuard,
}

impl<S, B> Service<ServiceRequest> for GuardMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let cookie_name = self.guard.config().cookie_name.clone();

        let token = req
            .cookie(&cookie_name)
            .map(|cookie| cookie.value().to_string());
        let now = chrono::Utc::now().timestamp();
        // 라우터가 매칭하는 디코딩된 경로 (`/%61dmin` → `/admin`)
        let path = req.match_info().as_str();
        let decision = self.guard.evaluate(path, token.as_deref(), now);

        Box::pin(async move {
            match decision {
                GuardDecision::Continue => {}
                GuardDecision::ContinueWithIdentity(user) => {
                    // 사용자 정보와 원본 토큰을 Request Extensions에 저장
                    let mut extensions = req.extensions_mut();
                    extensions.insert(user);
                    if let Some(token) = token {
                        extensions.insert(CredentialToken(token));
                    }
                }
                GuardDecision::RedirectTo(location) => {
                    let response = HttpResponse::Found()
                        .insert_header((LOCATION, location))
                        .finish();
                    return Ok(into_early_response(req, response));
                }
                GuardDecision::ClearCredentialAndRedirect(location) => {
                    let mut removal = Cookie::build(cookie_name, "").path("/").finish();
                    removal.make_removal();

                    let response = HttpResponse::Found()
                        .insert_header((LOCATION, location))
                        .cookie(removal)
                        .finish();
                    return Ok(into_early_response(req, response));
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn into_early_response<B>(req: ServiceRequest, response: HttpResponse) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}
