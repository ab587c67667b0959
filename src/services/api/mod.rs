//! CMDOLA REST API 클라이언트와 리소스 그룹
//!
//! 리소스 그룹은 [`CmdolaApi`]를 빌려 쓰는 얇은 래퍼입니다.
//!
//! ```rust,ignore
//! api.auth().login("chef", "secret").await?;
//! api.commandes().list_archives(Some(Period::Week), None).await?;
//! api.images().url("logo.png");
//! ```

pub mod api_client;
pub mod auth_api;
pub mod commandes_api;
pub mod config_api;
pub mod health_api;
pub mod images_api;
pub mod menu_api;
pub mod stats_api;
pub mod stripe_api;

pub use api_client::CmdolaApi;
pub use auth_api::AuthApi;
pub use commandes_api::CommandesApi;
pub use config_api::ConfigApi;
pub use health_api::HealthApi;
pub use images_api::ImagesApi;
pub use menu_api::MenuApi;
pub use stats_api::StatsApi;
pub use stripe_api::StripeApi;
