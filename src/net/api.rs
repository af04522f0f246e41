//! HTTP access to the server's update-all action.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Elsewhere only the pure reply interpretation is compiled, which is what
//! tests exercise.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures all collapse into [`UpdateError`]
//! so the controller runs one failure path for every case.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{UpdateAllResponse, UpdateError};

/// Server-side weather refresh.
pub trait WeatherApi {
    /// Trigger a crawl of every saved region.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError`] on transport failure, non-success status, or an
    /// undecodable body.
    async fn update_all_weather(&self) -> Result<UpdateAllResponse, UpdateError>;
}

/// Turn a raw status + body into the page's view of the result.
///
/// The body is decoded before the status is checked, so an error status with
/// a non-JSON body reports the decode failure. Beyond that nothing about the
/// body's shape is enforced: a missing or non-string `message`/`error` is
/// treated as absent.
///
/// # Errors
///
/// See [`WeatherApi::update_all_weather`].
pub fn interpret_reply(status: u16, body: &str, fallback: &str) -> Result<UpdateAllResponse, UpdateError> {
    let reply: Value = serde_json::from_str(body).map_err(|e| UpdateError::Decode(e.to_string()))?;
    let text = |key: &str| reply.get(key).and_then(Value::as_str).map(str::to_owned);
    if !(200..300).contains(&status) {
        let reason = text("error").filter(|e| !e.is_empty()).unwrap_or_else(|| fallback.to_owned());
        return Err(UpdateError::Server(reason));
    }
    Ok(UpdateAllResponse {
        message: text("message"),
        success_count: reply.get("success_count").and_then(Value::as_u64),
        failed_count: reply.get("failed_count").and_then(Value::as_u64),
    })
}

/// `gloo-net` client for the configured endpoint.
#[cfg(feature = "hydrate")]
pub struct HttpWeatherApi {
    endpoint: String,
    fallback: String,
}

#[cfg(feature = "hydrate")]
impl HttpWeatherApi {
    pub fn new(endpoint: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), fallback: fallback.into() }
    }
}

#[cfg(feature = "hydrate")]
impl WeatherApi for HttpWeatherApi {
    async fn update_all_weather(&self) -> Result<UpdateAllResponse, UpdateError> {
        let resp = gloo_net::http::Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| UpdateError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| UpdateError::Transport(e.to_string()))?;
        interpret_reply(status, &body, &self.fallback)
    }
}
