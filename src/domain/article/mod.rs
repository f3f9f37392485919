pub mod memory;
pub mod model;
pub mod repository;
pub mod service;

// 公開APIの再エクスポート

// model.rsから
pub use model::{Article, ArticleDraft, Paragraph, ParagraphDraft, ParagraphType, UpsertStatus};

// repository.rsから
pub use repository::{ArticleRepository, PgArticleRepository};

// memory.rsから
pub use memory::InMemoryArticleRepository;

// service.rsから
pub use service::{parse_article_id, ArticleError, ArticleResult, ArticleService};
