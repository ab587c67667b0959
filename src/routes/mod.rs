//! 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶어 등록합니다.
//! 역할 검사는 라우트 단위가 아니라 앱 전체에 걸린
//! [`GuardMiddleware`](crate::middlewares::GuardMiddleware)가 경로 접두사로 수행합니다.
//!
//! | 경로 | 가드 |
//! |------|------|
//! | `/health`, `/manifest.json`, `/menu`, `/commandes`, `/suivi/*`, `/paiement/*` | 없음 |
//! | `/login`, `/logout` | 면제 |
//! | `/admin/*` | admin |
//! | `/cuisine/*` | admin, chef |
//! | `/livraison/*` | admin, livreur |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::handlers;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check)
        .service(handlers::manifest::manifest);

    configure_auth_routes(cfg);
    configure_section_routes(cfg);
    configure_public_routes(cfg);
}

/// 로그인 / 로그아웃
///
/// ```bash
/// curl -i -X POST http://localhost:8080/login \
///   -d 'username=chef&password=secret'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::login_page)
        .service(handlers::auth::login)
        .service(handlers::auth::logout);
}

/// 역할별 화면 (가드 보호)
fn configure_section_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(handlers::sections::admin_dashboard)
            .service(handlers::sections::admin_orders)
            .service(handlers::sections::admin_archives),
    );

    cfg.service(
        web::scope("/cuisine")
            .service(handlers::sections::kitchen_board)
            .service(handlers::sections::update_order_status),
    );

    cfg.service(web::scope("/livraison").service(handlers::sections::delivery_board));
}

/// 손님용 공개 경로
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::public::menu)
        .service(handlers::public::create_order)
        .service(handlers::public::track_order)
        .service(handlers::public::create_payment);
}
