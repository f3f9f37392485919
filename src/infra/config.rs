use crate::types::{ConfigError, ConfigResult};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// デフォルトの待ち受けアドレス
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// リクエストボディの既定の上限（16MiB）
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// 起動時設定
///
/// コマンドライン引数を優先し、未指定の場合は環境変数（.envファイル含む）から読み込む。
#[derive(Parser, Debug, Clone)]
#[command(name = "articlestore", version, about = "記事と段落を管理するHTTP/JSONバックエンド")]
pub struct Config {
    /// PostgreSQLの接続文字列
    #[arg(long = "conn-str", alias = "conn_str", env = "DATABASE_URL", hide_env_values = true)]
    pub conn_str: Option<String>,

    /// HTTPサーバーの待ち受けアドレス
    #[arg(long = "listen-addr", alias = "listen_addr", env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// コネクションプールの最大接続数
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// バックエンド呼び出し1回あたりのタイムアウト（秒）
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// リクエストボディの上限（バイト）。超えた場合は413を返す
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

/// 検証済みの設定値
#[derive(Debug, Clone)]
pub struct Settings {
    pub conn_str: String,
    pub listen_addr: SocketAddr,
    pub max_connections: u32,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Config {
    /// 設定値を検証して `Settings` に変換する
    pub fn validate(self) -> ConfigResult<Settings> {
        let conn_str = self
            .conn_str
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_value("conn_str", "conn-str", "DATABASE_URL"))?;

        let listen_addr = self.listen_addr.parse::<SocketAddr>().map_err(|e| {
            ConfigError::invalid_value("listen_addr", format!("{}: {}", self.listen_addr, e))
        })?;

        if self.max_connections == 0 {
            return Err(ConfigError::invalid_value(
                "max_connections",
                "1以上を指定してください",
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                "request_timeout_secs",
                "1以上を指定してください",
            ));
        }

        if self.max_body_bytes == 0 {
            return Err(ConfigError::invalid_value(
                "max_body_bytes",
                "1以上を指定してください",
            ));
        }

        Ok(Settings {
            conn_str,
            listen_addr,
            max_connections: self.max_connections,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_body_bytes: self.max_body_bytes,
        })
    }
}
