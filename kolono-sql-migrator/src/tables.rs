use sea_query::Iden;

/// Column identifiers for the `users_json` table.
///
/// Used with sea-query for type-safe SQL query construction.
///
/// # Columns
///
/// - `Id` - Auto-increment primary key
/// - `Meta` - Model payload, stored as native JSON (`JSONB` on PostgreSQL, `JSON` on
///   MySQL, `TEXT` on SQLite)
#[derive(Iden, Clone)]
pub enum UsersJson {
    /// The table name: `users_json`
    Table,
    /// Primary key
    Id,
    /// Model payload column
    Meta,
}

/// Column identifiers for the `users_string` table.
///
/// Used with sea-query for type-safe SQL query construction.
///
/// # Columns
///
/// - `Id` - Auto-increment primary key
/// - `Meta` - Model payload, stored as an opaque serialized string (`TEXT` everywhere)
#[derive(Iden, Clone)]
pub enum UsersString {
    /// The table name: `users_string`
    Table,
    /// Primary key
    Id,
    /// Model payload column
    Meta,
}
