//! 이미지 업로드/삭제 (`/upload-image`, `/delete-image`, `/images`)
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::Value;

use crate::errors::{AppError, AppResult};
use crate::services::api::CmdolaApi;

pub struct ImagesApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> ImagesApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    /// multipart `image` 필드로 파일을 업로드합니다.
    ///
    /// multipart 경계가 들어간 Content-Type을 reqwest가 직접 설정하므로
    /// JSON 헤더를 붙이지 않은 요청을 사용합니다.
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>, mime: &str) -> AppResult<Value> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|e| AppError::ValidationError(format!("잘못된 MIME 타입 '{}': {}", mime, e)))?;

        let form = Form::new().part("image", part);

        self.api
            .fetch(self.api.bare_request(Method::POST, "/upload-image").multipart(form))
            .await
    }

    pub async fn delete(&self, filename: &str) -> AppResult<Value> {
        self.api
            .delete(&format!("/delete-image/{}", urlencoding::encode(filename)))
            .await
    }

    pub async fn list(&self) -> AppResult<Value> {
        self.api.get("/images").await
    }

    /// 이미지의 공개 URL (요청 없음)
    pub fn url(&self, filename: &str) -> String {
        self.api
            .url(&format!("/images/{}", urlencoding::encode(filename)))
    }
}
