use articlestore::app::{self, AppState};
use articlestore::domain::article::{ArticleService, PgArticleRepository};
use articlestore::infra::{self, Config};
use articlestore::types::InfraError;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 環境変数を読み込み（.envファイルがあれば使用）
    let _ = dotenvy::dotenv();
    infra::init_logging();

    if let Err(e) = run().await {
        tracing::error!(error = %format!("{:#}", e), "起動に失敗しました");
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let settings = Config::parse().validate().map_err(InfraError::from)?;

    let pool = infra::setup_database(&settings).await?;
    let repository = Arc::new(PgArticleRepository::new(pool.clone()));
    let service = ArticleService::new(repository, settings.request_timeout);

    let state = AppState::new(service).with_max_body_bytes(settings.max_body_bytes);
    app::serve(settings.listen_addr, state).await?;

    pool.close().await;
    Ok(())
}
