use crate::config::DatabaseConfig;
use crate::error::ApiError;
use crate::models::user::User;
use crate::store::UserStore;
use async_trait::async_trait;
use deadpool_postgres::{Config, Object, Pool, Runtime};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::Row;
use tracing::{error, info};

/// PostgreSQL への接続プールを握るリポジトリ層。
/// Deadpool の `Pool` を内部に保持し、`UserStore` の実装を提供する。
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// 接続プールを構築し、起動時に疎通確認まで実施する。
    ///
    /// # Arguments
    /// * `config` - The database configuration
    ///
    /// # Returns
    /// * `Result<Self, ApiError>` - Database instance or error
    pub async fn new(config: DatabaseConfig) -> Result<Self, ApiError> {
        info!("Creating PostgreSQL connection pool ({} connections)", config.max_connections);

        let pool = Self::create_pool(config)?;

        let db = Database { pool };
        db.test_connection().await?;

        Ok(db)
    }

    /// Deadpool 用の `Config` を組み立ててプールを生成する内部関数。
    /// 接続文字列はそのまま渡し、`sslmode` などのパラメータは tokio-postgres に解釈させる。
    fn create_pool(config: DatabaseConfig) -> Result<Pool, ApiError> {
        let mut pg_config = Config::new();

        pg_config.url = Some(config.connection_string);
        pg_config.connect_timeout = Some(config.connection_timeout);

        pg_config.manager = Some(deadpool_postgres::ManagerConfig {
            recycling_method: deadpool_postgres::RecyclingMethod::Fast,
        });

        pg_config.pool = Some(deadpool_postgres::PoolConfig::new(config.max_connections as usize));

        // Only used when the connection string asks for TLS
        let tls_connector = TlsConnector::builder()
            .build()
            .map_err(|e| {
                error!("Failed to create TLS connector: {}", e);
                ApiError::Internal(anyhow::Error::new(e).context("TLS connector creation failed"))
            })?;
        let tls = MakeTlsConnector::new(tls_connector);

        pg_config.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                ApiError::Database(format!("Connection pool creation failed: {}", e))
            })
    }

    /// プールから接続を借りる小さなラッパー。
    /// `PoolError` は `?` で `ApiError` に変換される。
    async fn get_connection(&self) -> Result<Object, ApiError> {
        Ok(self.pool.get().await?)
    }

    /// `SELECT 1` を投げてプールが機能するか確認する。
    pub async fn test_connection(&self) -> Result<(), ApiError> {
        let client = self.get_connection().await?;

        client.execute("SELECT 1", &[])
            .await
            .map_err(|e| {
                error!("Database connection test failed: {}", e);
                ApiError::Database(format!("Connection test failed: {}", e))
            })?;

        info!("Database connection test successful");
        Ok(())
    }

    /// 起動時に `users` テーブルを CREATE する簡易マイグレーター。
    pub async fn migrate(&self) -> Result<(), ApiError> {
        info!("Running database migrations");

        let client = self.get_connection().await?;

        let users_table = r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL,
                email TEXT NOT NULL UNIQUE
            )
        "#;

        client.execute(users_table, &[])
            .await
            .map_err(|e| {
                error!("Failed to create users table: {}", e);
                ApiError::Database(format!("Users table creation failed: {}", e))
            })?;

        info!("Database migrations completed successfully");
        Ok(())
    }
}

fn user_from_row(row: &Row) -> User {
    User {
        id: row.get(0),
        created_at: row.get(1),
        updated_at: row.get(2),
        email: row.get(3),
    }
}

#[async_trait]
impl UserStore for Database {
    /// ID とタイムスタンプはアプリ側で採番してから INSERT し、
    /// `RETURNING` で DB に保存された値を読み戻す。
    async fn create_user(&self, email: String) -> Result<User, ApiError> {
        let user = User::new(email);
        let client = self.get_connection().await?;

        let query = r#"
            INSERT INTO users (id, created_at, updated_at, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, created_at, updated_at, email
        "#;

        let row = client.query_one(
            query,
            &[&user.id, &user.created_at, &user.updated_at, &user.email]
        )
        .await?;

        let created_user = user_from_row(&row);

        info!("Created user with id: {}", created_user.id);
        Ok(created_user)
    }

    async fn delete_all_users(&self) -> Result<u64, ApiError> {
        let client = self.pool.get().await.map_err(|e| {
            error!("Failed to get a connection for deleting users: {}", e);
            ApiError::Database(format!("Error deleting all users : {} ", e))
        })?;

        let deleted = client.execute("DELETE FROM users", &[])
            .await
            .map_err(|e| {
                error!("Failed to delete users: {}", e);
                ApiError::Database(format!("Error deleting all users : {} ", e))
            })?;

        info!("Deleted {} users", deleted);
        Ok(deleted)
    }
}
