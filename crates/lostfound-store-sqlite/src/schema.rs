//! SQL schema for the item store.
//!
//! Executed at every connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are inserted and deleted, never updated.
CREATE TABLE IF NOT EXISTS items (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT,
    status      TEXT NOT NULL CHECK (status IN ('Lost', 'Found')),
    location    TEXT,
    photo       TEXT,              -- blob store name, '' when absent
    contact     TEXT,
    created_at  TEXT NOT NULL      -- 'YYYY-MM-DD HH:MM:SS' UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS items_created_idx ON items(created_at);

PRAGMA user_version = 1;
";
