use thiserror::Error;

/// 設定関連のエラー型
/// コマンドライン引数、環境変数の欠落や値の検証エラーを定義
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 必須の設定値が見つからない
    #[error("設定値が見つかりません: {name}（--{flag} または環境変数 {env} を指定してください）")]
    MissingValue {
        name: String,
        flag: String,
        env: String,
    },

    /// 設定値が不正
    #[error("設定値が不正です: {name} - {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    /// 設定値不足エラーを作成
    pub fn missing_value<N, F, E>(name: N, flag: F, env: E) -> Self
    where
        N: Into<String>,
        F: Into<String>,
        E: Into<String>,
    {
        Self::MissingValue {
            name: name.into(),
            flag: flag.into(),
            env: env.into(),
        }
    }

    /// 不正な設定値エラーを作成
    pub fn invalid_value<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// 設定エラーのResult型エイリアス
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
