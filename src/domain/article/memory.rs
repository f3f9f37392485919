use super::model::{Article, ArticleDraft, Paragraph, UpsertStatus};
use super::repository::ArticleRepository;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct State {
    articles: BTreeMap<i64, Article>,
    next_article_id: i64,
    next_paragraph_id: i64,
}

impl State {
    fn next_article_id(&mut self) -> i64 {
        self.next_article_id += 1;
        self.next_article_id
    }

    fn next_paragraph_id(&mut self) -> i64 {
        self.next_paragraph_id += 1;
        self.next_paragraph_id
    }
}

/// インメモリの記事ストレージ
///
/// PostgreSQL版と同じ意味論（名前による作成/置換、id降順の一覧、冪等な削除）を持つ。
/// 書き込みは単一のロック下で行うため、同名記事の保存も直列化される。
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    state: RwLock<State>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create_or_update(&self, draft: &ArticleDraft) -> Result<UpsertStatus> {
        let mut state = self.state.write().await;

        let existing = state
            .articles
            .values()
            .find(|a| a.name == draft.name)
            .map(|a| a.id);

        let (article_id, status) = match existing {
            Some(id) => (id, UpsertStatus::Updated),
            None => {
                let id = state.next_article_id();
                let article = Article {
                    id,
                    created_at: Utc::now(),
                    name: draft.name.clone(),
                    content: Vec::new(),
                };
                state.articles.insert(id, article);
                (id, UpsertStatus::Created)
            }
        };

        let content: Vec<Paragraph> = draft
            .content
            .iter()
            .map(|p| Paragraph {
                id: state.next_paragraph_id(),
                article_id,
                paragraph_type: p.paragraph_type,
                content: p.content.clone(),
                metadata: p.metadata.clone(),
            })
            .collect();

        if let Some(article) = state.articles.get_mut(&article_id) {
            article.content = content;
        }
        Ok(status)
    }

    async fn list(&self) -> Result<Vec<Article>> {
        let state = self.state.read().await;
        Ok(state.articles.values().rev().cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut state = self.state.write().await;
        Ok(state.articles.remove(&id).map_or(0, |_| 1))
    }
}
