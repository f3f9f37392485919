use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::fmt;

/// 段落の種別（閉じた列挙、これ以外の値は入力時に拒否する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "paragraph_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParagraphType {
    /// 大見出し
    PrimaryHeader,
    /// 小見出し
    SecondaryHeader,
    /// 本文
    Text,
    /// コード
    Code,
}

impl ParagraphType {
    pub const ALL: [ParagraphType; 4] = [
        ParagraphType::PrimaryHeader,
        ParagraphType::SecondaryHeader,
        ParagraphType::Text,
        ParagraphType::Code,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphType::PrimaryHeader => "PRIMARY_HEADER",
            ParagraphType::SecondaryHeader => "SECONDARY_HEADER",
            ParagraphType::Text => "TEXT",
            ParagraphType::Code => "CODE",
        }
    }
}

impl fmt::Display for ParagraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `null` を既定値（空文字列・空配列）として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// 段落エンティティ（paragraphsテーブルと一致）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Paragraph {
    pub id: i64,
    pub article_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub paragraph_type: ParagraphType,
    pub content: String,
    pub metadata: String,
}

// 記事エンティティ（articlesテーブル + 所有する段落列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub name: String,
    /// 挿入順（id昇順）に並んだ段落
    #[sqlx(skip)]
    pub content: Vec<Paragraph>,
}

/// 保存要求の段落部分
///
/// クライアントが送ってくる `id` や `article_id` は無視される。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParagraphDraft {
    #[serde(rename = "type")]
    pub paragraph_type: ParagraphType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: String,
}

/// 保存要求（POST /articles のリクエストボディ）
///
/// `name` が唯一の自然キーで、同名の記事があれば段落を丸ごと置き換える。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleDraft {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ParagraphDraft>,
}

impl ArticleDraft {
    pub fn new<N: Into<String>>(name: N, content: Vec<ParagraphDraft>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// ストレージに触れる前の入力検証
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("記事名(name)が空です".to_string());
        }
        Ok(())
    }
}

impl ParagraphDraft {
    pub fn new<C: Into<String>, M: Into<String>>(
        paragraph_type: ParagraphType,
        content: C,
        metadata: M,
    ) -> Self {
        Self {
            paragraph_type,
            content: content.into(),
            metadata: metadata.into(),
        }
    }
}

/// CreateOrUpdateの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertStatus {
    /// 新規作成された
    Created,
    /// 既存記事の段落が置き換えられた
    Updated,
}

impl UpsertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsertStatus::Created => "created",
            UpsertStatus::Updated => "updated",
        }
    }
}

impl fmt::Display for UpsertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
