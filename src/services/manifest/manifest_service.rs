//! PWA 매니페스트 생성 서비스
//!
//! 배달(livraison) 화면을 홈 화면 앱으로 설치할 수 있도록
//! 레스토랑 설정(`GET /config`)에서 이름과 로고를 읽어 매니페스트를 만듭니다.
//! 설정 조회나 해석에 실패하면 고정된 기본 매니페스트로 대체합니다.

use crate::domain::dto::{ManifestIcon, RestaurantConfig, WebManifest};
use crate::errors::{AppError, AppResult};
use crate::services::api::CmdolaApi;

const DEFAULT_RESTAURANT_NAME: &str = "CMDOLA";
const FALLBACK_ICON: &str = "/favicon.ico";
const START_URL: &str = "/livraison";
const BRAND_COLOR: &str = "#1e293b";

/// 생성된 매니페스트와 그 출처
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestOutcome {
    /// 레스토랑 설정으로 생성됨 (캐시 가능)
    Generated(WebManifest),
    /// 설정을 읽지 못해 기본값 사용 (캐시하지 않음)
    Fallback(WebManifest),
}

impl ManifestOutcome {
    pub fn manifest(&self) -> &WebManifest {
        match self {
            ManifestOutcome::Generated(m) | ManifestOutcome::Fallback(m) => m,
        }
    }

    pub fn is_cacheable(&self) -> bool {
        matches!(self, ManifestOutcome::Generated(_))
    }
}

#[derive(Debug, Clone)]
pub struct ManifestService {
    api: CmdolaApi,
}

impl ManifestService {
    pub fn new(api: CmdolaApi) -> Self {
        Self { api }
    }

    /// 매니페스트를 생성합니다. 실패하지 않으며 실패 시 기본 매니페스트를 돌려줍니다.
    pub async fn manifest(&self) -> ManifestOutcome {
        match self.restaurant_config().await {
            Ok(config) => ManifestOutcome::Generated(build_manifest(self.api.base_url(), &config)),
            Err(e) => {
                log::error!("❌ 매니페스트 생성 실패, 기본값 사용: {}", e);
                ManifestOutcome::Fallback(fallback_manifest())
            }
        }
    }

    async fn restaurant_config(&self) -> AppResult<RestaurantConfig> {
        let raw = self.api.config().get().await?;

        serde_json::from_value(raw)
            .map_err(|e| AppError::ExternalServiceError(format!("레스토랑 설정 해석 실패: {}", e)))
    }
}

/// 레스토랑 설정으로 매니페스트를 만듭니다.
pub fn build_manifest(base_url: &str, config: &RestaurantConfig) -> WebManifest {
    let name = config
        .nom
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_RESTAURANT_NAME);

    let logo_url = config
        .theme
        .as_ref()
        .and_then(|t| t.logo.as_deref())
        .filter(|logo| !logo.is_empty())
        .map(|logo| format!("{}/images/{}", base_url, logo))
        .unwrap_or_else(|| FALLBACK_ICON.to_string());

    let icon = |sizes: &str, purpose: Option<&str>| ManifestIcon {
        src: logo_url.clone(),
        sizes: sizes.to_string(),
        mime_type: "image/png".to_string(),
        purpose: purpose.map(str::to_string),
    };

    WebManifest {
        name: format!("{} - Livraison", name),
        short_name: name.to_string(),
        description: Some(format!("Application de livraison pour {}", name)),
        start_url: START_URL.to_string(),
        display: "standalone".to_string(),
        background_color: BRAND_COLOR.to_string(),
        theme_color: BRAND_COLOR.to_string(),
        orientation: Some("portrait".to_string()),
        icons: vec![
            icon("512x512", Some("any maskable")),
            icon("192x192", Some("any maskable")),
            icon("128x128", None),
        ],
        categories: Some(vec!["business".to_string(), "food".to_string()]),
        lang: Some("fr-BE".to_string()),
        dir: Some("ltr".to_string()),
    }
}

/// 설정을 읽을 수 없을 때 사용하는 기본 매니페스트
pub fn fallback_manifest() -> WebManifest {
    WebManifest {
        name: format!("{} Livraison", DEFAULT_RESTAURANT_NAME),
        short_name: "Livraison".to_string(),
        description: None,
        start_url: START_URL.to_string(),
        display: "standalone".to_string(),
        background_color: BRAND_COLOR.to_string(),
        theme_color: BRAND_COLOR.to_string(),
        orientation: None,
        icons: vec![ManifestIcon {
            src: FALLBACK_ICON.to_string(),
            sizes: "any".to_string(),
            mime_type: "image/x-icon".to_string(),
            purpose: None,
        }],
        categories: None,
        lang: None,
        dir: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::ThemeConfig;

    #[test]
    fn test_manifest_from_config() {
        let config = RestaurantConfig {
            nom: Some("Rare Burger".to_string()),
            theme: Some(ThemeConfig {
                logo: Some("logo.png".to_string()),
            }),
        };

        let manifest = build_manifest("https://api.cmdola.be/api", &config);

        assert_eq!(manifest.name, "Rare Burger - Livraison");
        assert_eq!(manifest.short_name, "Rare Burger");
        assert_eq!(
            manifest.description.as_deref(),
            Some("Application de livraison pour Rare Burger")
        );
        assert_eq!(manifest.icons.len(), 3);
        assert!(manifest
            .icons
            .iter()
            .all(|i| i.src == "https://api.cmdola.be/api/images/logo.png"));
        assert_eq!(manifest.icons[0].purpose.as_deref(), Some("any maskable"));
        assert_eq!(manifest.icons[2].purpose, None);
        assert_eq!(manifest.lang.as_deref(), Some("fr-BE"));
    }

    #[test]
    fn test_manifest_defaults_without_name_or_logo() {
        let manifest = build_manifest("http://api", &RestaurantConfig::default());

        assert_eq!(manifest.name, "CMDOLA - Livraison");
        assert!(manifest.icons.iter().all(|i| i.src == "/favicon.ico"));
    }

    #[test]
    fn test_fallback_manifest_shape() {
        let json = serde_json::to_value(fallback_manifest()).unwrap();

        assert_eq!(json["name"], "CMDOLA Livraison");
        assert_eq!(json["short_name"], "Livraison");
        assert_eq!(json["icons"][0]["type"], "image/x-icon");
        assert_eq!(json["icons"][0]["sizes"], "any");
        assert!(json.get("lang").is_none());
        assert!(json.get("description").is_none());
        assert!(json["icons"][0].get("purpose").is_none());
    }
}
