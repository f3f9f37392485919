use crate::app::error::ApiError;
use crate::domain::article::{Article, ArticleDraft, ArticleService};
use crate::infra::config::DEFAULT_MAX_BODY_BYTES;
use crate::types::{InfraError, InfraResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// ハンドラーに渡される共有状態
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    /// リクエストボディの上限（バイト）
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(articles: ArticleService) -> Self {
        Self {
            articles,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// 成功レスポンス `{"status": "..."}`
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// POST /articles
pub async fn create_or_update_article(
    State(state): State<AppState>,
    payload: Result<Json<ArticleDraft>, JsonRejection>,
) -> Result<Json<StatusBody>, ApiError> {
    let Json(draft) = payload.inspect_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "不正なリクエストボディ");
    })?;

    let status = state.articles.create_or_update(&draft).await?;
    Ok(Json(StatusBody {
        status: status.as_str(),
    }))
}

/// GET /articles
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.articles.list().await?;
    Ok(Json(articles))
}

/// DELETE /articles/:id
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusBody>, ApiError> {
    state.articles.delete(&id).await?;
    Ok(Json(StatusBody { status: "deleted" }))
}

/// ルーターを構築する
pub fn create_app(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    Router::new()
        .route(
            "/articles",
            get(list_articles).post(create_or_update_article),
        )
        .route("/articles/:id", delete(delete_article))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTPサーバーを起動し、終了シグナルを受けるまで待ち受ける
pub async fn serve(addr: SocketAddr, state: AppState) -> InfraResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| InfraError::server("bind", e))?;

    tracing::info!(%addr, "HTTPサーバーを起動しました");

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| InfraError::server("serve", e))?;

    tracing::info!("HTTPサーバーを停止しました");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-Cハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERMハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("終了シグナルを受信しました");
}
