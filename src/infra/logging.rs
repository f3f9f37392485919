use tracing_subscriber::EnvFilter;

/// ログ出力を初期化する
///
/// `RUST_LOG` が未設定の場合は `info` レベルで出力する。
/// 二重初期化（テストなど）の場合は何もしない。
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
