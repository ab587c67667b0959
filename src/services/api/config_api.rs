//! 레스토랑 설정 (`/config`)
use reqwest::Method;
use serde_json::Value;

use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct ConfigApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> ConfigApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> AppResult<Value> {
        self.api.get("/config").await
    }

    /// 설정을 갱신합니다 (admin 토큰 필요).
    pub async fn update(&self, data: &Value) -> AppResult<Value> {
        self.api.send_json(Method::PUT, "/config", data).await
    }
}
