//! API 상태 확인 (`/health`)
use serde_json::Value;

use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct HealthApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> HealthApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    pub async fn check(&self) -> AppResult<Value> {
        self.api.get("/health").await
    }

    /// 데이터베이스 등 하위 의존성까지 확인합니다.
    pub async fn check_deep(&self) -> AppResult<Value> {
        self.api.get("/health?deep=true").await
    }
}
