//! SQL schema migrations for kolono validated model columns.
//!
//! This crate provides the database schema for storing validated models in SQL
//! columns, rendered with the dialect-specific column types selected by
//! [`kolono::TypedColumn`]. It supports SQLite, MySQL, and PostgreSQL through
//! feature flags.
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
//! kolono-sql-migrator = { version = "0.1", default-features = false, features = ["postgres"] }
//! ```
//!
//! # Usage
//!
//! The main entry point is the [`new`] function, which creates a [`Migrator`]
//! instance configured with all migrations.
//!
//! ```rust,ignore
//! use sqlx_migrator::{Migrate, Plan};
//!
//! // Acquire a database connection
//! let mut conn = pool.acquire().await?;
//!
//! // Create the migrator for your database type
//! let migrator = kolono_sql_migrator::new::<sqlx::Sqlite>()?;
//!
//! // Run all pending migrations
//! migrator.run(&mut *conn, &Plan::apply_all()).await?;
//! ```
//!
//! # Database Schema
//!
//! After running all migrations, the database will contain:
//!
//! ## Users Json Table
//!
//! Stores a validated model as native structured JSON:
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `id` | INTEGER | Auto-increment primary key |
//! | `meta` | JSONB / JSON / TEXT | Model payload (per dialect) |
//!
//! ## Users String Table
//!
//! Stores a validated model as an opaque serialized string:
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | `id` | INTEGER | Auto-increment primary key |
//! | `meta` | TEXT | Model payload |
//!
//! The `meta` column type is never hardcoded in a migration; it is rendered through
//! [`kolono::TypedColumn::column_def`], so the DDL always agrees with what the
//! wrapper types bind at runtime.

use sqlx_migrator::{Info, Migrator};

mod m0001;
mod tables;

pub use m0001::InitMigration;
pub use tables::{UsersJson, UsersString};

/// Creates a new [`Migrator`] instance with all kolono migrations registered.
///
/// The migrator is generic over the database type and works with SQLite, MySQL, and PostgreSQL
/// when the corresponding feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// use sqlx_migrator::{Migrate, Plan};
///
/// // For SQLite
/// let migrator = kolono_sql_migrator::new::<sqlx::Sqlite>()?;
///
/// // For PostgreSQL
/// let migrator = kolono_sql_migrator::new::<sqlx::Postgres>()?;
///
/// // Run migrations
/// migrator.run(&mut *conn, &Plan::apply_all()).await?;
/// ```
///
/// # Errors
///
/// Returns an error if migration registration fails.
pub fn new<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    InitMigration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migration(Box::new(InitMigration))?;

    Ok(migrator)
}
