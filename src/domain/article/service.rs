use super::model::{Article, ArticleDraft, UpsertStatus};
use super::repository::ArticleRepository;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// 記事操作のエラー型
///
/// 入力不正・タイムアウト・ストレージ障害の3種類を区別する。
/// 「見つからない」はエラーではない（作成分岐、または冪等な削除として扱う）。
#[derive(Error, Debug)]
pub enum ArticleError {
    /// クライアント入力の不正（ストレージには到達しない）
    #[error("{0}")]
    InvalidInput(String),

    /// バックエンド呼び出しのタイムアウト
    #[error("データベース操作がタイムアウトしました（{}秒）", .0.as_secs())]
    Timeout(Duration),

    /// ストレージ層の障害
    #[error("{0:#}")]
    Storage(#[source] anyhow::Error),
}

impl ArticleError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }

    /// クライアント起因のエラーかどうか
    pub fn is_client_error(&self) -> bool {
        matches!(self, ArticleError::InvalidInput(_))
    }
}

pub type ArticleResult<T> = std::result::Result<T, ArticleError>;

/// 削除パスのidを解析する
///
/// 10進数字のみで構成された符号なし整数でなければ入力エラー（`+1` も拒否する）。
/// i64に収まらない値はどの行とも一致しないため `None` を返す。
pub fn parse_article_id(raw: &str) -> ArticleResult<Option<i64>> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArticleError::invalid_input("invalid article ID"));
    }
    let id: u64 = raw
        .parse()
        .map_err(|_| ArticleError::invalid_input("invalid article ID"))?;
    Ok(i64::try_from(id).ok())
}

/// 記事ストア
///
/// ストレージ実装をDIで受け取り、入力検証とタイムアウトを適用する。
#[derive(Clone)]
pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
    timeout: Duration,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    async fn with_timeout<T, F>(&self, operation: &'static str, fut: F) -> ArticleResult<T>
    where
        F: Future<Output = anyhow::Result<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = %format!("{:#}", e), "ストレージ操作に失敗しました");
                Err(ArticleError::Storage(e))
            }
            Err(_) => {
                tracing::error!(operation, timeout_secs = self.timeout.as_secs(), "ストレージ操作がタイムアウトしました");
                Err(ArticleError::Timeout(self.timeout))
            }
        }
    }

    /// 名前で記事を作成、または段落を丸ごと置き換える
    pub async fn create_or_update(&self, draft: &ArticleDraft) -> ArticleResult<UpsertStatus> {
        draft.validate().map_err(ArticleError::InvalidInput)?;

        let status = self
            .with_timeout("create_or_update", self.repository.create_or_update(draft))
            .await?;

        tracing::info!(
            name = %draft.name,
            paragraphs = draft.content.len(),
            %status,
            "記事を保存しました"
        );
        Ok(status)
    }

    /// 全記事をid降順で取得する（段落は挿入順）
    pub async fn list(&self) -> ArticleResult<Vec<Article>> {
        self.with_timeout("list", self.repository.list()).await
    }

    /// 記事を削除する
    ///
    /// 該当する記事がなくても成功として扱う。
    pub async fn delete(&self, raw_id: &str) -> ArticleResult<()> {
        let Some(id) = parse_article_id(raw_id)? else {
            tracing::info!(raw_id, "範囲外のidのため削除対象はありません");
            return Ok(());
        };

        let removed = self
            .with_timeout("delete", self.repository.delete(id))
            .await?;

        tracing::info!(id, removed, "記事を削除しました");
        Ok(())
    }
}
