use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqliteConnection;
use sqlx_migrator::{Migrate, Plan};

#[tokio::test]
async fn sqlite_apply_and_revert() -> anyhow::Result<()> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    let migrator = kolono_sql_migrator::new::<sqlx::Sqlite>()?;
    let mut conn = pool.acquire().await?;

    migrator.run(&mut *conn, &Plan::apply_all()).await?;

    assert!(table_exists(&mut conn, "users_json").await?);
    assert!(table_exists(&mut conn, "users_string").await?);

    migrator.run(&mut *conn, &Plan::revert_all()).await?;

    assert!(!table_exists(&mut conn, "users_json").await?);
    assert!(!table_exists(&mut conn, "users_string").await?);

    Ok(())
}

#[tokio::test]
async fn sqlite_apply_is_idempotent() -> anyhow::Result<()> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    let migrator = kolono_sql_migrator::new::<sqlx::Sqlite>()?;
    let mut conn = pool.acquire().await?;

    migrator.run(&mut *conn, &Plan::apply_all()).await?;
    migrator.run(&mut *conn, &Plan::apply_all()).await?;

    assert!(table_exists(&mut conn, "users_json").await?);

    Ok(())
}

async fn table_exists(conn: &mut SqliteConnection, name: &str) -> anyhow::Result<bool> {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(name)
            .fetch_one(conn)
            .await?;

    Ok(count > 0)
}
