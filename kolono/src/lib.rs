//! Validated model columns for SQL databases.
//!
//! This crate lets a `serde` + [`validator`] model live transparently inside a SQL
//! column. It provides wrapper types that implement the SQLx `Type`, `Encode` and
//! `Decode` traits, supporting SQLite, MySQL, and PostgreSQL through feature flags.
//!
//! # Features
//!
//! - **`sqlite`** - Enables SQLite database support
//! - **`mysql`** - Enables MySQL database support
//! - **`postgres`** - Enables PostgreSQL database support
//!
//! All features are enabled by default. You can selectively enable only the databases you need:
//!
//! ```toml
//! [dependencies]
//! kolono = { version = "0.1", default-features = false, features = ["postgres"] }
//! ```
//!
//! # Usage
//!
//! Derive `Serialize`, `Deserialize`, and `Validate` on your model, then wrap it in
//! [`ValidatedJson`](sql_types::ValidatedJson) or [`ValidatedText`](sql_types::ValidatedText)
//! wherever it is bound to or read from a column:
//!
//! ```rust,ignore
//! use kolono::sql_types::ValidatedJson;
//! use serde::{Deserialize, Serialize};
//! use validator::Validate;
//!
//! #[derive(Debug, Serialize, Deserialize, Validate)]
//! struct UserMeta {
//!     #[validate(length(min = 1))]
//!     a: String,
//!     b: i32,
//!     c: Option<bool>,
//! }
//!
//! let meta = ValidatedJson::new(UserMeta { a: "test".into(), b: 1, c: None })?;
//!
//! sqlx::query("INSERT INTO users_json (meta) VALUES ($1)")
//!     .bind(meta)
//!     .execute(&pool)
//!     .await?;
//!
//! let (meta,): (ValidatedJson<UserMeta>,) =
//!     sqlx::query_as("SELECT meta FROM users_json LIMIT 1")
//!         .fetch_one(&pool)
//!         .await?;
//! ```
//!
//! Records are validated when they are decoded from the database, so a row that no
//! longer satisfies the model's constraints surfaces as a column decode error instead
//! of silently producing an invalid value. `NULL` columns are handled with
//! `Option<ValidatedJson<T>>` / `Option<ValidatedText<T>>` as usual.
//!
//! # Storage Formats
//!
//! - [`ValidatedJson`](sql_types::ValidatedJson) - Native structured JSON. Columns
//!   resolve to `JSONB` on PostgreSQL, `JSON` on MySQL, and `TEXT` on SQLite.
//! - [`ValidatedText`](sql_types::ValidatedText) - Opaque serialized string. Columns
//!   resolve to `TEXT` on every backend.
//!
//! # Column Rendering
//!
//! The [`TypedColumn`] trait maps each wrapper to a concrete sea-query column type per
//! [`Dialect`], so schema migrations can render the right DDL for the target backend.
//! See the `kolono-sql-migrator` crate for migrations built on top of this hook.

mod column;
mod error;
pub mod sql_types;

pub use column::*;
pub use error::*;
