//! 서비스 계층 모듈
//!
//! - [`guard`] - 역할 기반 라우트 가드 (순수 함수, I/O 없음)
//! - [`api`] - CMDOLA REST API 클라이언트
//! - [`manifest`] - 레스토랑 설정 기반 PWA 매니페스트
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//!
//! ```rust,ignore
//! let api = CmdolaApi::from_env()?;
//! let manifest = ManifestService::new(api.clone());
//!
//! App::new()
//!     .app_data(web::Data::new(api))
//!     .app_data(web::Data::new(manifest))
//! ```

pub mod api;
pub mod guard;
pub mod manifest;
