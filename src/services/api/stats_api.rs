//! 통계와 내보내기 (`/stats`, `/export/{period}`)
use serde_json::Value;

use crate::domain::dto::Period;
use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct StatsApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> StatsApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    pub async fn general(&self) -> AppResult<Value> {
        self.api.get("/stats").await
    }

    /// 브라우저에서 직접 여는 내보내기 URL.
    ///
    /// 다운로드 링크에는 헤더를 실을 수 없어 토큰을 쿼리로 전달합니다.
    /// 토큰이 없으면 쿼리를 생략합니다.
    pub fn export_url(&self, period: Period) -> String {
        let url = self.api.url(&format!("/export/{}", period.as_str()));

        match self.api.token() {
            Some(token) => format!("{}?token={}", url, urlencoding::encode(token)),
            None => url,
        }
    }
}
