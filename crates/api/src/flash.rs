//! Transient user-facing messages ("flash" messages).
//!
//! A form handler attaches a [`Flash`] to its redirect as a signed cookie.
//! The next page that renders reads it with the [`IncomingFlash`]
//! extractor, shows it once and clears the cookie. Cookies whose signature
//! does not verify against the configured secret are ignored.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use ventureboard_core::signing;

use crate::state::AppState;

/// Name of the cookie carrying the signed flash message.
pub const FLASH_COOKIE: &str = "flash";

/// Severity of a flash message; selects its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
        }
    }
}

/// A one-time status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Encode into a signed cookie value.
    pub fn to_cookie_value(&self, secret: &str) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(payload) => Some(signing::sign(secret, &payload)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode flash message");
                None
            }
        }
    }

    /// Decode a signed cookie value; `None` if it is forged or malformed.
    pub fn from_cookie_value(secret: &str, value: &str) -> Option<Self> {
        let payload = signing::verify(secret, value)?;
        serde_json::from_str(&payload).ok()
    }
}

/// Extractor for the flash message carried by the current request.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash {
    /// The verified message, if any.
    pub flash: Option<Flash>,
    /// Whether the request carried a flash cookie at all (valid or not).
    pub cookie_present: bool,
}

impl IncomingFlash {
    /// Read the flash cookie from request headers.
    pub fn from_headers(headers: &HeaderMap, secret: &str) -> Self {
        match find_cookie(headers, FLASH_COOKIE) {
            Some(value) => Self {
                flash: Flash::from_cookie_value(secret, value),
                cookie_present: true,
            },
            None => Self::default(),
        }
    }

    /// Turn a rendered page into a response, clearing the flash cookie if
    /// the request carried one so the message is shown only once.
    pub fn render(self, page: Html<String>) -> Response {
        if self.cookie_present {
            let clear = format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax");
            (AppendHeaders([(SET_COOKIE, clear)]), page).into_response()
        } else {
            page.into_response()
        }
    }
}

impl FromRequestParts<AppState> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers, &state.config.secret_key))
    }
}

/// `303 See Other` to `location`, carrying `flash` for the next page.
pub fn redirect_with_flash(secret: &str, location: &str, flash: Flash) -> Response {
    match flash.to_cookie_value(secret) {
        Some(value) => {
            let cookie = format!("{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax");
            (AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to(location)).into_response()
        }
        None => Redirect::to(location).into_response(),
    }
}

/// Find a cookie value by name across all `Cookie` headers.
fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
