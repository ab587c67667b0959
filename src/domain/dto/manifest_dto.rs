//! PWA 매니페스트 DTO
use serde::{Deserialize, Serialize};

/// 매니페스트 생성에 필요한 레스토랑 설정 일부 (`GET /config`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantConfig {
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub logo: Option<String>,
}

/// Web App Manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    pub icons: Vec<ManifestIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}
