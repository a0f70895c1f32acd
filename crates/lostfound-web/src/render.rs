//! Server-side HTML for the list page and the creation form.
//!
//! Pages are assembled with `format!`; every piece of user-supplied text goes
//! through [`escape`] first.

use std::fmt::Write as _;

use lostfound_core::item::{Item, Status};

use crate::{blob::BlobStore, flash::Flash};

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
  let flash_html = flash
    .map(|f| {
      format!(
        "<div class=\"alert alert-{}\">{}</div>\n",
        f.level.as_str(),
        escape(&f.message)
      )
    })
    .unwrap_or_default();

  format!(
    "<!doctype html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{title} · Lost &amp; Found</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }}
.alert {{ padding: .75rem 1rem; border-radius: .25rem; margin-bottom: 1rem; }}
.alert-success {{ background: #d1e7dd; }} .alert-danger {{ background: #f8d7da; }} .alert-info {{ background: #cff4fc; }}
.item {{ display: flex; gap: 1rem; border: 1px solid #ddd; border-radius: .25rem; padding: 1rem; margin-bottom: .75rem; }}
.item img {{ width: 8rem; height: 8rem; object-fit: cover; }}
.badge {{ padding: .1rem .5rem; border-radius: .25rem; color: #fff; }}
.badge-Lost {{ background: #dc3545; }} .badge-Found {{ background: #198754; }}
.muted {{ color: #666; font-size: .9rem; }}
</style>
</head>
<body>
<nav><a href=\"/\">Items</a> · <a href=\"/add\">Report an item</a></nav>
<h1>{title}</h1>
{flash_html}{body}
</body>
</html>
"
  )
}

fn status_options(selected: Option<Status>, any_label: &str) -> String {
  let mut out = format!(
    "<option value=\"\"{}>{any_label}</option>",
    if selected.is_none() { " selected" } else { "" }
  );
  for status in Status::ALL {
    let sel = if selected == Some(status) { " selected" } else { "" };
    let _ = write!(out, "<option value=\"{status}\"{sel}>{status}</option>");
  }
  out
}

fn item_card(item: &Item) -> String {
  let photo = item
    .photo
    .as_deref()
    .map(|name| {
      format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape(&BlobStore::url(name)),
        escape(&item.title)
      )
    })
    .unwrap_or_default();

  let mut details = String::new();
  if !item.description.is_empty() {
    let _ = write!(details, "<p>{}</p>", escape(&item.description));
  }
  if !item.location.is_empty() {
    let _ = write!(details, "<p class=\"muted\">Location: {}</p>", escape(&item.location));
  }
  if !item.contact.is_empty() {
    let _ = write!(details, "<p class=\"muted\">Contact: {}</p>", escape(&item.contact));
  }

  format!(
    "<div class=\"item\">
{photo}
<div>
<h3>{title} <span class=\"badge badge-{status}\">{status}</span></h3>
{details}
<p class=\"muted\">Reported {created}</p>
<form method=\"post\" action=\"/delete/{id}\"><button type=\"submit\">Delete</button></form>
</div>
</div>
",
    title = escape(&item.title),
    status = item.status,
    created = item.created_at.format("%Y-%m-%d %H:%M:%S"),
    id = item.id,
  )
}

/// The item list with its search form. `q` and `status` are echoed back as
/// the user typed them.
pub fn index(items: &[Item], q: &str, status: &str, flash: Option<&Flash>) -> String {
  let selected = status.parse::<Status>().ok();

  let mut body = format!(
    "<form method=\"get\" action=\"/\">
<input type=\"search\" name=\"q\" value=\"{q}\" placeholder=\"Search title, description, location\">
<select name=\"status\">{options}</select>
<button type=\"submit\">Filter</button>
</form>
",
    q = escape(q),
    options = status_options(selected, "All"),
  );

  if items.is_empty() {
    body.push_str("<p class=\"muted\">No items found.</p>\n");
  } else {
    for item in items {
      body.push_str(&item_card(item));
    }
  }

  layout("Items", flash, &body)
}

/// The empty creation form.
pub fn form(flash: Option<&Flash>) -> String {
  let body = format!(
    "<form method=\"post\" action=\"/add\" enctype=\"multipart/form-data\">
<p><label>Title <input name=\"title\" required></label></p>
<p><label>Status <select name=\"status\" required>{options}</select></label></p>
<p><label>Description <textarea name=\"description\"></textarea></label></p>
<p><label>Location <input name=\"location\"></label></p>
<p><label>Contact <input name=\"contact\"></label></p>
<p><label>Photo <input type=\"file\" name=\"photo\" accept=\"image/*\"></label></p>
<p><button type=\"submit\">Save</button></p>
</form>
",
    options = status_options(None, "Choose…"),
  );
  layout("Report an item", flash, &body)
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use uuid::Uuid;

  use super::*;

  fn item() -> Item {
    Item {
      id:          Uuid::nil(),
      title:       "<b>Keys</b>".into(),
      description: "Ring with \"Tux\" fob".into(),
      status:      Status::Found,
      location:    String::new(),
      photo:       Some("abc_keys.jpg".into()),
      contact:     "front desk".into(),
      created_at:  Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    }
  }

  #[test]
  fn escape_covers_markup_characters() {
    assert_eq!(escape("<a href=\"x\">'&'</a>"), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
  }

  #[test]
  fn index_escapes_user_text() {
    let html = index(&[item()], "\"><script>", "", None);
    assert!(html.contains("&lt;b&gt;Keys&lt;/b&gt;"));
    assert!(!html.contains("<b>Keys"));
    assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    assert!(!html.contains("\"><script>"));
  }

  #[test]
  fn index_shows_item_fields() {
    let html = index(&[item()], "", "", None);
    assert!(html.contains("badge-Found"));
    assert!(html.contains("src=\"/static/uploads/abc_keys.jpg\""));
    assert!(html.contains("Contact: front desk"));
    assert!(!html.contains("Location:"));
    assert!(html.contains("2024-01-02 03:04:05"));
    assert!(html.contains(&format!("action=\"/delete/{}\"", Uuid::nil())));
  }

  #[test]
  fn index_keeps_selected_status() {
    let html = index(&[], "", "Lost", None);
    assert!(html.contains("<option value=\"Lost\" selected>"));
    assert!(html.contains("No items found."));

    let html = index(&[], "", "bogus", None);
    assert!(html.contains("<option value=\"\" selected>All</option>"));
  }

  #[test]
  fn flash_is_rendered() {
    let html = form(Some(&Flash::danger("Title and Status are required.")));
    assert!(html.contains("alert-danger"));
    assert!(html.contains("Title and Status are required."));
    assert!(html.contains("enctype=\"multipart/form-data\""));
  }
}
