//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod quiz_results;
mod quizzes;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按数据库配置连接并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库不支持 WAL
        if !url.contains(":memory:") {
            opt = opt.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse,
    quizzes::{
        entities::{NewQuiz, Quiz},
        requests::QuizListQuery,
        responses::QuizSummary,
    },
    results::{
        entities::{NewQuizResult, QuizResult},
        requests::ResultListQuery,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 测验模块
    async fn create_quiz(&self, quiz: NewQuiz) -> Result<Quiz> {
        self.create_quiz_impl(quiz).await
    }

    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(quiz_id).await
    }

    async fn list_quizzes_with_pagination(
        &self,
        query: QuizListQuery,
    ) -> Result<PaginatedResponse<QuizSummary>> {
        self.list_quizzes_with_pagination_impl(query).await
    }

    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool> {
        self.delete_quiz_impl(quiz_id).await
    }

    // 成绩模块
    async fn create_quiz_result(&self, result: NewQuizResult) -> Result<QuizResult> {
        self.create_quiz_result_impl(result).await
    }

    async fn list_quiz_results_with_pagination(
        &self,
        query: ResultListQuery,
    ) -> Result<PaginatedResponse<QuizResult>> {
        self.list_quiz_results_with_pagination_impl(query).await
    }
}
