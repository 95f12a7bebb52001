//! Dialect-aware column-type selection for validated model columns.

use sea_query::{ColumnDef, ColumnType, IntoIden};
use sqlx::Database;

use crate::sql_types::{ValidatedJson, ValidatedText};

/// A database backend dialect.
///
/// Used to pick the concrete SQL column type for a model column when rendering
/// schema DDL, since backends disagree on how structured data should be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SQLite
    Sqlite,
    /// MySQL
    MySql,
    /// PostgreSQL
    Postgres,
}

impl Dialect {
    /// Resolves the dialect for a SQLx database type.
    ///
    /// # Panics
    ///
    /// Panics if `DB` is not one of the supported drivers.
    pub fn of<DB: Database>() -> Self {
        match DB::NAME {
            "SQLite" => Self::Sqlite,
            "MySQL" => Self::MySql,
            "PostgreSQL" => Self::Postgres,
            name => panic!("'{name}' not supported, consider using SQLite, PostgreSQL or MySQL"),
        }
    }
}

/// Maps a column wrapper type to its SQL column type per dialect.
///
/// This is the rendering hook used by schema migrations: instead of hardcoding a
/// column type, a migration asks the wrapper which type it resolves to for the
/// target backend.
///
/// # Example
///
/// ```rust,ignore
/// use kolono::{Dialect, TypedColumn};
/// use kolono::sql_types::ValidatedJson;
/// use sea_query::Table;
///
/// let statement = Table::create()
///     .table(UsersJson::Table)
///     .col(ValidatedJson::<UserMeta>::column_def(UsersJson::Meta, Dialect::Postgres).not_null())
///     .to_owned();
/// ```
pub trait TypedColumn {
    /// Returns the sea-query column type this wrapper resolves to for a dialect.
    fn column_type(dialect: Dialect) -> ColumnType;

    /// Builds a column definition with the dialect-specific column type.
    fn column_def<N: IntoIden>(name: N, dialect: Dialect) -> ColumnDef {
        ColumnDef::new_with_type(name, Self::column_type(dialect))
    }
}

impl<T> TypedColumn for ValidatedJson<T> {
    fn column_type(dialect: Dialect) -> ColumnType {
        match dialect {
            Dialect::Postgres => ColumnType::JsonBinary,
            Dialect::MySql => ColumnType::Json,
            // SQLite has no JSON column type, data is stored as plain text.
            Dialect::Sqlite => ColumnType::Text,
        }
    }
}

impl<T> TypedColumn for ValidatedText<T> {
    fn column_type(_dialect: Dialect) -> ColumnType {
        ColumnType::Text
    }
}
