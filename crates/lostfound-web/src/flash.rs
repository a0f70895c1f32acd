//! One-shot status messages carried across a redirect in a cookie.
//!
//! A handler that redirects attaches a [`Flash`]; the next page render reads
//! it with [`Flash::from_headers`], shows it, and clears the cookie.

use axum::{
  http::{HeaderMap, HeaderValue, header},
  response::{IntoResponse, Redirect, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;

pub const COOKIE_NAME: &str = "lostfound_flash";

/// Visual weight of a message; maps onto CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Success,
  Danger,
  Info,
}

impl Level {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Success => "success",
      Self::Danger => "danger",
      Self::Info => "info",
    }
  }

  fn parse(s: &str) -> Option<Self> {
    match s {
      "success" => Some(Self::Success),
      "danger" => Some(Self::Danger),
      "info" => Some(Self::Info),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
  pub level:   Level,
  pub message: String,
}

impl Flash {
  pub fn success(message: impl Into<String>) -> Self {
    Self { level: Level::Success, message: message.into() }
  }

  pub fn danger(message: impl Into<String>) -> Self {
    Self { level: Level::Danger, message: message.into() }
  }

  pub fn info(message: impl Into<String>) -> Self {
    Self { level: Level::Info, message: message.into() }
  }

  fn encode(&self) -> String {
    B64.encode(format!("{}\n{}", self.level.as_str(), self.message))
  }

  fn decode(value: &str) -> Option<Self> {
    let raw = B64.decode(value).ok()?;
    let text = String::from_utf8(raw).ok()?;
    let (level, message) = text.split_once('\n')?;
    Some(Self { level: Level::parse(level)?, message: message.to_owned() })
  }

  /// Read the pending flash from the request's `Cookie` headers, if any.
  /// A malformed cookie is treated as absent.
  pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
    headers
      .get_all(header::COOKIE)
      .iter()
      .filter_map(|v| v.to_str().ok())
      .flat_map(|v| v.split(';'))
      .filter_map(|pair| pair.trim().split_once('='))
      .find(|(name, _)| *name == COOKIE_NAME)
      .and_then(|(_, value)| Self::decode(value))
  }

  /// A `303 See Other` to `to` that carries this message.
  pub fn redirect(self, to: &str) -> Response {
    let cookie = format!(
      "{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
      self.encode()
    );
    let mut res = Redirect::to(to).into_response();
    // base64url output is always a valid header value
    if let Ok(value) = HeaderValue::from_str(&cookie) {
      res.headers_mut().append(header::SET_COOKIE, value);
    }
    res
  }
}

/// `Set-Cookie` value that removes a consumed flash.
pub fn clear_cookie() -> HeaderValue {
  HeaderValue::from_static("lostfound_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
  use axum::http::StatusCode;

  use super::*;

  fn cookie_from(res: &Response) -> String {
    let set = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    set.split(';').next().unwrap().to_owned()
  }

  #[test]
  fn redirect_then_read_back() {
    let res = Flash::success("Item added successfully!").redirect("/");
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/");

    let mut headers = HeaderMap::new();
    let cookie = format!("theme=dark; {}", cookie_from(&res));
    headers.insert(header::COOKIE, HeaderValue::from_str(&cookie).unwrap());

    let flash = Flash::from_headers(&headers).unwrap();
    assert_eq!(flash, Flash::success("Item added successfully!"));
  }

  #[test]
  fn message_may_contain_separators() {
    let original = Flash::danger("a; b=c\nd");
    let mut headers = HeaderMap::new();
    let cookie = format!("{COOKIE_NAME}={}", original.encode());
    headers.insert(header::COOKIE, HeaderValue::from_str(&cookie).unwrap());
    assert_eq!(Flash::from_headers(&headers), Some(original));
  }

  #[test]
  fn garbage_cookie_is_ignored() {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("lostfound_flash=!!!"));
    assert_eq!(Flash::from_headers(&headers), None);
    assert_eq!(Flash::from_headers(&HeaderMap::new()), None);
  }

  #[test]
  fn clear_cookie_expires_immediately() {
    let v = clear_cookie();
    let v = v.to_str().unwrap();
    assert!(v.starts_with("lostfound_flash=;"));
    assert!(v.contains("Max-Age=0"));
  }
}
