//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The calculator is
//! stateless, so state only carries configuration and the static info
//! payload, both built once at startup and read-only afterwards.

use crate::config::AppConfig;
use nutricalc_shared::types::ApiInfo;
use std::sync::Arc;

/// Shared application state
///
/// All fields are wrapped in Arc, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-built response for the info endpoint
    pub info: Arc<ApiInfo>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            info: Arc::new(nutricalc_shared::api_info()),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the info payload
    #[inline]
    pub fn info(&self) -> &ApiInfo {
        &self.info
    }
}
