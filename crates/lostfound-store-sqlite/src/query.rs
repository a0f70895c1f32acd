//! SQL assembly for [`ItemQuery`].
//!
//! Each present filter contributes one clause; clauses are joined with `AND`
//! and every value is bound as a parameter.

use lostfound_core::store::ItemQuery;
use rusqlite::functions::FunctionFlags;

use crate::encode::{ITEM_COLUMNS, encode_status};

/// A statement plus its positional parameters (`?1`, `?2`, …).
#[derive(Debug, PartialEq, Eq)]
pub struct ListStatement {
  pub sql:    String,
  pub params: Vec<String>,
}

/// SQL name of the Unicode lowercasing function. SQLite's own `lower()` only
/// folds ASCII, while search text is folded with [`str::to_lowercase`].
pub const FOLD_CASE: &str = "fold_case";

/// Register [`FOLD_CASE`] on `conn`. Functions are per connection, so this
/// runs every time a connection is opened.
pub fn register_fold_case(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    FOLD_CASE,
    1,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let text: Option<String> = ctx.get(0)?;
      Ok(text.map(|t| t.to_lowercase()))
    },
  )
}

/// Escape LIKE metacharacters so user text matches literally under
/// `ESCAPE '\'`.
pub fn like_pattern(text: &str) -> String {
  let mut out = String::with_capacity(text.len() + 2);
  out.push('%');
  for c in text.chars() {
    if matches!(c, '\\' | '%' | '_') {
      out.push('\\');
    }
    out.push(c);
  }
  out.push('%');
  out
}

pub fn build_list(query: &ItemQuery) -> ListStatement {
  let mut conds: Vec<String> = vec![];
  let mut params: Vec<String> = vec![];

  if let Some(text) = &query.text {
    params.push(like_pattern(text));
    let n = params.len();
    conds.push(format!(
      "({FOLD_CASE}(title) LIKE ?{n} ESCAPE '\\' \
       OR {FOLD_CASE}(description) LIKE ?{n} ESCAPE '\\' \
       OR {FOLD_CASE}(location) LIKE ?{n} ESCAPE '\\')"
    ));
  }

  if let Some(status) = query.status {
    params.push(encode_status(status).to_owned());
    conds.push(format!("status = ?{}", params.len()));
  }

  let where_clause = if conds.is_empty() {
    String::new()
  } else {
    format!(" WHERE {}", conds.join(" AND "))
  };

  // rowid breaks ties between rows created within the same second.
  let sql = format!(
    "SELECT {ITEM_COLUMNS} FROM items{where_clause} \
     ORDER BY created_at DESC, rowid DESC"
  );

  ListStatement { sql, params }
}

#[cfg(test)]
mod tests {
  use lostfound_core::item::Status;

  use super::*;

  #[test]
  fn no_filters_no_where() {
    let stmt = build_list(&ItemQuery::default());
    assert!(!stmt.sql.contains("WHERE"));
    assert!(stmt.sql.ends_with("ORDER BY created_at DESC, rowid DESC"));
    assert!(stmt.params.is_empty());
  }

  #[test]
  fn both_filters_join_with_and() {
    let stmt = build_list(&ItemQuery {
      text:   Some("wallet".into()),
      status: Some(Status::Found),
    });
    assert!(stmt.sql.contains("fold_case(title) LIKE ?1"));
    assert!(stmt.sql.contains(") AND status = ?2"));
    assert_eq!(stmt.params, ["%wallet%", "Found"]);
  }

  #[test]
  fn status_only_is_first_param() {
    let stmt = build_list(&ItemQuery { text: None, status: Some(Status::Lost) });
    assert!(stmt.sql.contains("WHERE status = ?1"));
    assert_eq!(stmt.params, ["Lost"]);
  }

  #[test]
  fn user_text_is_never_interpolated() {
    let stmt = build_list(&ItemQuery {
      text:   Some("'; drop table items; --".into()),
      status: None,
    });
    assert!(!stmt.sql.contains("drop table"));
  }

  #[test]
  fn like_metacharacters_are_escaped() {
    assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
  }
}
