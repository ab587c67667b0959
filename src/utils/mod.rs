//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`display_terminal`] - 시작 배너와 가드 테이블 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_guard_table;
//!
//! print_guard_table(&GuardConfig::default());
//! ```

pub mod display_terminal;
