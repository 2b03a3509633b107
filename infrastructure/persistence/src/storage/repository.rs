use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

use super::entity::KeyValueEntryEntity;

pub struct KeyValueStoragePostgres {
    pool: PgPool,
}

impl KeyValueStoragePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStorage for KeyValueStoragePostgres {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entity = sqlx::query_as::<_, KeyValueEntryEntity>(
            "SELECT key, value, updated_at FROM key_value_entries WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key, "Could not read key-value entry");
            StorageError::Read
        })?;

        if let Some(entry) = &entity {
            tracing::debug!(key = %entry.key, updated_at = %entry.updated_at, "Loaded key-value entry");
        }

        Ok(entity.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO key_value_entries (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, key, "Could not write key-value entry");
            StorageError::Write
        })?;

        Ok(())
    }
}
