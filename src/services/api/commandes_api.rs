//! 주문 관리 (`/commandes`)
//!
//! | 메서드 | 경로 | 권한 |
//! |--------|------|------|
//! | `list` | GET `/commandes` | admin |
//! | `list_archives` | GET `/commandes/archives?period&statut` | admin, chef |
//! | `list_actives` | GET `/commandes/actives` | 공개 |
//! | `create` | POST `/commandes` | 공개 |
//! | `get` | GET `/commandes/{id}` | admin |
//! | `get_public` | GET `/commandes/public/{id}` | 공개 |
//! | `track` | GET `/commandes/track/{numero}` | 공개 |
//! | `update` / `delete` | PUT / DELETE `/commandes/{id}` | admin |
//! | `update_status` | PUT `/commandes/{id}/status` | admin, chef |
use reqwest::Method;
use serde_json::Value;

use crate::domain::dto::{ArchiveStatus, OrderList, Period, StatusUpdate};
use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct CommandesApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> CommandesApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Value> {
        self.api.get("/commandes").await
    }

    /// 완료/취소된 주문 목록. 필터가 없으면 쿼리 문자열을 붙이지 않습니다.
    pub async fn list_archives(
        &self,
        period: Option<Period>,
        statut: Option<ArchiveStatus>,
    ) -> AppResult<OrderList> {
        self.api.get(&archives_path(period, statut)).await
    }

    /// 진행 중인 주문 (완료, 취소, 결제 대기 제외)
    pub async fn list_actives(&self) -> AppResult<OrderList> {
        self.api.get("/commandes/actives").await
    }

    pub async fn create(&self, data: &Value) -> AppResult<Value> {
        self.api.send_json(Method::POST, "/commandes", data).await
    }

    pub async fn get(&self, commande_id: &str) -> AppResult<Value> {
        self.api.get(&order_path(commande_id)).await
    }

    pub async fn get_public(&self, commande_id: &str) -> AppResult<Value> {
        self.api
            .get(&format!("/commandes/public/{}", urlencoding::encode(commande_id)))
            .await
    }

    pub async fn track(&self, numero: &str) -> AppResult<Value> {
        self.api
            .get(&format!("/commandes/track/{}", urlencoding::encode(numero)))
            .await
    }

    pub async fn update(&self, commande_id: &str, data: &Value) -> AppResult<Value> {
        self.api
            .send_json(Method::PUT, &order_path(commande_id), data)
            .await
    }

    pub async fn delete(&self, commande_id: &str) -> AppResult<Value> {
        self.api.delete(&order_path(commande_id)).await
    }

    pub async fn update_status(&self, commande_id: &str, statut: &str) -> AppResult<Value> {
        let body = StatusUpdate {
            statut: statut.to_string(),
        };

        self.api
            .send_json(
                Method::PUT,
                &format!("{}/status", order_path(commande_id)),
                &body,
            )
            .await
    }
}

fn order_path(commande_id: &str) -> String {
    format!("/commandes/{}", urlencoding::encode(commande_id))
}

fn archives_path(period: Option<Period>, statut: Option<ArchiveStatus>) -> String {
    let params: Vec<String> = [
        period.map(|p| format!("period={}", p.as_str())),
        statut.map(|s| format!("statut={}", s.as_str())),
    ]
    .into_iter()
    .flatten()
    .collect();

    if params.is_empty() {
        "/commandes/archives".to_string()
    } else {
        format!("/commandes/archives?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archives_path_without_filters() {
        assert_eq!(archives_path(None, None), "/commandes/archives");
    }

    #[test]
    fn test_archives_path_with_filters() {
        assert_eq!(
            archives_path(Some(Period::Week), None),
            "/commandes/archives?period=week"
        );
        assert_eq!(
            archives_path(None, Some(ArchiveStatus::Annulee)),
            "/commandes/archives?statut=annulee"
        );
        assert_eq!(
            archives_path(Some(Period::Today), Some(ArchiveStatus::Terminee)),
            "/commandes/archives?period=today&statut=terminee"
        );
    }

    #[test]
    fn test_order_ids_are_percent_encoded() {
        assert_eq!(order_path("A 12/3"), "/commandes/A%2012%2F3");
    }
}
