use crate::infra::config::Settings;
use crate::types::{InfraError, InfraResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// データベース接続プールを作成
/// 接続文字列は起動時設定（--conn-str / DATABASE_URL）から受け取ります
pub async fn create_pool(settings: &Settings) -> InfraResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.request_timeout)
        .connect(&settings.conn_str)
        .await
        .map_err(InfraError::database_connection)
}

/// データベースの初期化（マイグレーション実行）
/// テーブルが存在しない場合のみ作成される
pub async fn initialize_database(pool: &PgPool) -> InfraResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(InfraError::migration)
}

/// プールの作成とデータベース初期化を一括で行う便利関数
pub async fn setup_database(settings: &Settings) -> InfraResult<PgPool> {
    let pool = create_pool(settings).await?;
    initialize_database(&pool).await?;
    tracing::info!(
        max_connections = settings.max_connections,
        "データベースの初期化が完了しました"
    );
    Ok(pool)
}
