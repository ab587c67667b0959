//! 메뉴 관리 (`/menu`)
use reqwest::Method;
use serde_json::Value;

use crate::errors::AppResult;
use crate::services::api::CmdolaApi;

pub struct MenuApi<'a> {
    api: &'a CmdolaApi,
}

impl<'a> MenuApi<'a> {
    pub fn new(api: &'a CmdolaApi) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> AppResult<Value> {
        self.api.get("/menu").await
    }

    pub async fn add_product(&self, product: &Value) -> AppResult<Value> {
        self.api.send_json(Method::POST, "/menu", product).await
    }

    pub async fn get_product(&self, product_id: &str) -> AppResult<Value> {
        self.api.get(&product_path(product_id)).await
    }

    pub async fn update_product(&self, product_id: &str, data: &Value) -> AppResult<Value> {
        self.api
            .send_json(Method::PUT, &product_path(product_id), data)
            .await
    }

    pub async fn delete_product(&self, product_id: &str) -> AppResult<Value> {
        self.api.delete(&product_path(product_id)).await
    }
}

fn product_path(product_id: &str) -> String {
    format!("/menu/{}", urlencoding::encode(product_id))
}
