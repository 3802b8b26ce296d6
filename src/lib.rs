//! TVシリーズカタログ閲覧ツール
//!
//! ビューロジックは series-catalog-common に置き、ここではCLIからの取得と表示を扱う。

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod output;
