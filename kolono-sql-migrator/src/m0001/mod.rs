//! Initial database schema migration.
//!
//! This module contains the first migration that creates the tables holding
//! validated model columns.

mod users_json;
mod users_string;

use sqlx_migrator::vec_box;

/// Initial migration that creates the model column tables.
///
/// This migration creates the following database objects:
///
/// ## Users Json Table
///
/// Stores a validated model as native structured JSON:
/// - `id` - Auto-increment primary key (INTEGER)
/// - `meta` - Model payload, rendered per dialect (`JSONB` on PostgreSQL, `JSON` on
///   MySQL, `TEXT` on SQLite)
///
/// ## Users String Table
///
/// Stores a validated model as an opaque serialized string:
/// - `id` - Auto-increment primary key (INTEGER)
/// - `meta` - Model payload (`TEXT` on every backend)
pub struct InitMigration;

#[cfg(feature = "sqlite")]
sqlx_migrator::sqlite_migration!(
    InitMigration,
    "main",
    "init_migration",
    vec_box![],
    vec_box![
        users_json::create_table::Operation,
        users_string::create_table::Operation,
    ]
);

#[cfg(feature = "mysql")]
sqlx_migrator::mysql_migration!(
    InitMigration,
    "main",
    "init_migration",
    vec_box![],
    vec_box![
        users_json::create_table::Operation,
        users_string::create_table::Operation,
    ]
);

#[cfg(feature = "postgres")]
sqlx_migrator::postgres_migration!(
    InitMigration,
    "main",
    "init_migration",
    vec_box![],
    vec_box![
        users_json::create_table::Operation,
        users_string::create_table::Operation,
    ]
);
