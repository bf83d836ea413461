//! Email relay client used by the contact form.
//!
//! Client-side (hydrate): multipart `POST` to the EmailJS `send-form`
//! endpoint via `gloo-net`.
//! Server-side (SSR): the relay is unavailable and every send fails, since
//! submissions only ever originate in the browser.
//!
//! ERROR HANDLING
//! ==============
//! One attempt per call, no retry. Transport errors, non-2xx statuses, and
//! missing configuration all come back as `RelayError`; the form shows them
//! with one generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use thiserror::Error;

use crate::config::{ConfigError, RelayConfig};
use crate::state::contact::ContactPayload;

/// Multipart field carrying the attachment file.
pub const ATTACHMENT_FIELD: &str = "attachment";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("relay not configured: {0}")]
    NotConfigured(ConfigError),
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected message: status {0}")]
    Status(u16),
    #[error("relay not available on server")]
    Unavailable,
}

/// Delivers a contact payload somewhere a human will read it.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    /// Send one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message was not accepted for delivery.
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

/// Text fields of the multipart form, in submission order.
pub fn form_fields(config: &RelayConfig, payload: &ContactPayload) -> Vec<(&'static str, String)> {
    vec![
        ("service_id", config.service_id.clone()),
        ("template_id", config.template_id.clone()),
        ("user_id", config.public_key.clone()),
        ("name", payload.name.clone()),
        ("email", payload.email.clone()),
        ("message", payload.message.clone()),
    ]
}

/// EmailJS-backed relay.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: Result<RelayConfig, ConfigError>,
}

impl EmailJsRelay {
    pub fn new(config: Result<RelayConfig, ConfigError>) -> Self {
        Self { config }
    }

    /// Relay configured from the build-time environment.
    pub fn from_build_env() -> Self {
        Self::new(RelayConfig::from_build_env())
    }

    pub fn config(&self) -> Result<&RelayConfig, &ConfigError> {
        self.config.as_ref()
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let config = self.config.as_ref().map_err(|e| RelayError::NotConfigured(e.clone()))?;

        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(js_error)?;
            for (key, value) in form_fields(config, payload) {
                form.append_with_str(key, &value).map_err(js_error)?;
            }
            if let Some(attachment) = &payload.attachment {
                let blob = attachment_blob(attachment)?;
                form.append_with_blob_and_filename(ATTACHMENT_FIELD, &blob, &attachment.file_name)
                    .map_err(js_error)?;
            }

            let resp = gloo_net::http::Request::post(&config.endpoint)
                .body(form)
                .map_err(|e| RelayError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(RelayError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, payload);
            Err(RelayError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> RelayError {
    RelayError::Transport(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn attachment_blob(attachment: &crate::state::contact::Attachment) -> Result<web_sys::Blob, RelayError> {
    let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&attachment.content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)
}
