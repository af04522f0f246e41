//! Page controller configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Templates may embed a JSON object in
//! `<script type="application/json" id="weather-page-config">` to override
//! endpoint, timing, locale, or dialog copy. Every field is optional; missing
//! fields keep the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_UPDATE_ENDPOINT: &str = "/api/update_all_weather";
pub const DEFAULT_CLOCK_INTERVAL_MS: u32 = 60_000;
pub const DEFAULT_ALERT_DISMISS_DELAY_MS: u32 = 5_000;
pub const DEFAULT_LOCALE: &str = "ko-KR";
pub const DEFAULT_IDLE_ICON: &str = "bi-arrow-clockwise";
pub const DEFAULT_BUSY_ICON: &str = "bi-hourglass-split";

/// Element id of the optional embedded JSON config.
pub const CONFIG_ELEMENT_ID: &str = "weather-page-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The embedded JSON could not be decoded.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A duration field was zero.
    #[error("config value {field} must be positive")]
    ZeroDuration { field: &'static str },
}

/// Dialog and label copy for the update-all flow. Defaults match the
/// default `ko-KR` locale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateMessages {
    pub confirm: String,
    pub busy_label: String,
    pub failure_prefix: String,
    pub generic_failure: String,
    pub success_fallback: String,
}

impl Default for UpdateMessages {
    fn default() -> Self {
        Self {
            confirm: "전체 지역의 날씨 정보를 업데이트하시겠습니까?\n(크롤링에 시간이 소요될 수 있습니다)".to_owned(),
            busy_label: "업데이트 중...".to_owned(),
            failure_prefix: "날씨 업데이트 중 오류가 발생했습니다: ".to_owned(),
            generic_failure: "업데이트 실패".to_owned(),
            success_fallback: "업데이트 완료".to_owned(),
        }
    }
}

/// Icon classes swapped on the update button while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BusyIcons {
    pub idle: String,
    pub busy: String,
}

impl Default for BusyIcons {
    fn default() -> Self {
        Self { idle: DEFAULT_IDLE_ICON.to_owned(), busy: DEFAULT_BUSY_ICON.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub update_endpoint: String,
    pub clock_interval_ms: u32,
    pub alert_dismiss_delay_ms: u32,
    pub locale: String,
    pub icons: BusyIcons,
    pub messages: UpdateMessages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            update_endpoint: DEFAULT_UPDATE_ENDPOINT.to_owned(),
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            alert_dismiss_delay_ms: DEFAULT_ALERT_DISMISS_DELAY_MS,
            locale: DEFAULT_LOCALE.to_owned(),
            icons: BusyIcons::default(),
            messages: UpdateMessages::default(),
        }
    }
}

impl PageConfig {
    /// Build config from the embedded JSON text, if any.
    ///
    /// Absent or blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a duration is zero.
    pub fn from_json(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        let cfg: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if cfg.clock_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration { field: "clock_interval_ms" });
        }
        if cfg.alert_dismiss_delay_ms == 0 {
            return Err(ConfigError::ZeroDuration { field: "alert_dismiss_delay_ms" });
        }
        Ok(cfg)
    }

    #[must_use]
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.clock_interval_ms))
    }

    #[must_use]
    pub fn alert_dismiss_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.alert_dismiss_delay_ms))
    }
}
