//! CMDOLA 웹 프론트 서비스
//!
//! 레스토랑 주문 플랫폼 CMDOLA의 웹 계층입니다.
//! 토큰 쿠키에 담긴 역할로 관리자/주방/배달 화면 접근을 통제하고,
//! 모든 데이터는 외부 CMDOLA REST API를 통해 읽고 씁니다.
//!
//! # Features
//!
//! - **라우트 가드**: `/admin`, `/cuisine`, `/livraison` 역할 기반 접근 제어
//! - **API 클라이언트**: 인증, 설정, 메뉴, 주문, 이미지, 통계, 헬스, Stripe
//! - **PWA 매니페스트**: 레스토랑 설정으로 동적 생성
//! - **로그인/로그아웃**: API가 발급한 토큰을 HttpOnly 쿠키로 보관
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ GuardMiddleware │ ← 경로/쿠키/시각으로 판정 (I/O 없음)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    CmdolaApi    │ ← Bearer 토큰 전달
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CMDOLA REST API │ ← 데이터 소유
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cmdola_web::config::GuardConfig;
//! use cmdola_web::services::guard::RouteGuard;
//!
//! let guard = RouteGuard::new(Arc::new(GuardConfig::default()));
//! let decision = guard.evaluate("/cuisine", Some(token), chrono::Utc::now().timestamp());
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod utils;
