//! PWA 매니페스트 (`/manifest.json`)

pub mod manifest_service;

pub use manifest_service::{build_manifest, fallback_manifest, ManifestOutcome, ManifestService};
