//! 주문(commandes) 관련 DTO
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// 아카이브/내보내기 기간 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Week,
    Month,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        }
    }
}

/// 아카이브 상태 필터 (완료 / 취소 / 전체)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveStatus {
    Terminee,
    Annulee,
    All,
}

impl ArchiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveStatus::Terminee => "terminee",
            ArchiveStatus::Annulee => "annulee",
            ArchiveStatus::All => "all",
        }
    }
}

/// `GET /admin/archives` 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct ArchiveQuery {
    pub period: Option<Period>,
    pub statut: Option<ArchiveStatus>,
}

/// 주문 목록 응답 (`/commandes/archives`, `/commandes/actives`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(default)]
    pub commandes: Vec<Value>,
    #[serde(default)]
    pub total: u64,
}

/// 주문 상태 변경 요청 (`PUT /commandes/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatusUpdate {
    #[validate(length(min = 1, message = "상태값이 필요합니다"))]
    pub statut: String,
}
