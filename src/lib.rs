//! 記事（順序付きの段落列）を管理するHTTP/JSONバックエンド
//!
//! - `domain::article`: 記事ストア（名前による作成/置換、一覧、削除）
//! - `app`: HTTPルーティングとエラーレスポンス
//! - `infra`: 設定、データベース接続、ログ
//! - `types`: 共通エラー型

pub mod app;
pub mod domain;
pub mod infra;
pub mod types;
