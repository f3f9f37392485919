//! 型定義モジュール
//!
//! アプリケーション全体で使用される共通的なエラー型を管理します。
//! - 設定エラー: 起動時の引数・環境変数の検証
//! - インフラエラー: データベース接続、マイグレーション、リスナー

pub mod config;
pub mod infra;

// 便利な再エクスポート
pub use config::{ConfigError, ConfigResult};
pub use infra::{InfraError, InfraResult};
