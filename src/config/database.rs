use crate::config::AppConfig;
use crate::domain::{gift::entity::gift, guest::entity::guest, party::entity::party};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use std::time::Duration;
use tracing::info;

pub async fn establish_connection(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.db_max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Successfully connected to the database.");

    if config.db_schema_update {
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

/// 엔티티 정의로부터 테이블을 생성합니다. 이미 존재하는 테이블은 건너뜁니다.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // Order matters for foreign keys! (Parent first, then Child)
    create_table_if_not_exists(db, &schema, party::Entity).await?;
    create_table_if_not_exists(db, &schema, gift::Entity).await?;
    create_table_if_not_exists(db, &schema, guest::Entity).await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let table_name = entity.table_name().to_string();
    let create_stmt = backend.build(schema.create_table_from_entity(entity).if_not_exists());

    db.execute(create_stmt).await.map_err(|e| {
        tracing::error!("Failed to create table {}: {}", table_name, e);
        e
    })?;

    Ok(())
}
