//! ログ初期化

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` があればそれを使い、なければ verbose で debug に切り替える
pub fn init(verbose: bool) {
    let default_level = if verbose { "series_catalog=debug" } else { "series_catalog=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
