//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 데이터는 모두 CMDOLA API가 소유하므로 핸들러는 입력 검증,
//! 토큰 전달, 응답 변환만 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (admin / cuisine / livraison / 손님)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP + 토큰 쿠키
//! ┌─────────────────────▼───────────────────────┐
//!   GuardMiddleware - 역할 기반 라우트 가드          ← Middleware
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   CmdolaApi - REST 클라이언트                    ← Service Layer
//! └─────────────────────┬───────────────────────┘
//!                       │ Authorization: Bearer
//!                  CMDOLA REST API
//! ```
//!
//! ## 모듈
//!
//! - [`health`] - 헬스체크
//! - [`manifest`] - PWA 매니페스트
//! - [`auth`] - 로그인 폼, 로그인, 로그아웃
//! - [`sections`] - 역할별 화면 (가드 보호)
//! - [`public`] - 손님용 공개 경로

pub mod auth;
pub mod health;
pub mod manifest;
pub mod public;
pub mod sections;
