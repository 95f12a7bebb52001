use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use kolono::sql_types::ValidatedJson;
use kolono::{Dialect, TypedColumn};

use crate::UsersJson;

pub struct Operation;

fn up_statement(dialect: Dialect) -> TableCreateStatement {
    Table::create()
        .table(UsersJson::Table)
        .col(
            ColumnDef::new(UsersJson::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ValidatedJson::<serde_json::Value>::column_def(UsersJson::Meta, dialect).not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(UsersJson::Table).to_owned()
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement(Dialect::Sqlite).to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}

#[cfg(feature = "mysql")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::MySql> for Operation {
    async fn up(&self, connection: &mut sqlx::MySqlConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement(Dialect::MySql).to_string(sea_query::MysqlQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::MySqlConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::MysqlQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}

#[cfg(feature = "postgres")]
#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Postgres> for Operation {
    async fn up(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = up_statement(Dialect::Postgres).to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(&self, connection: &mut sqlx::PgConnection) -> Result<(), sqlx_migrator::Error> {
        let statment = down_statement().to_string(sea_query::PostgresQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_column_follows_dialect() {
        let pg = up_statement(Dialect::Postgres).to_string(sea_query::PostgresQueryBuilder);
        let my = up_statement(Dialect::MySql).to_string(sea_query::MysqlQueryBuilder);
        let lite = up_statement(Dialect::Sqlite).to_string(sea_query::SqliteQueryBuilder);

        assert!(pg.contains("\"meta\" jsonb NOT NULL"), "{pg}");
        assert!(my.contains("`meta` json NOT NULL"), "{my}");
        assert!(lite.contains("\"meta\" text NOT NULL"), "{lite}");
    }
}
