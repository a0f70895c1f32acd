pub mod add;
pub mod delete;
pub mod list;

use axum::{
  http::header,
  response::{Html, IntoResponse, Response},
};

use crate::flash::clear_cookie;

/// Wrap rendered HTML, expiring the flash cookie if one was just shown.
pub(super) fn page(html: String, shown_flash: bool) -> Response {
  if shown_flash {
    ([(header::SET_COOKIE, clear_cookie())], Html(html)).into_response()
  } else {
    Html(html).into_response()
  }
}
