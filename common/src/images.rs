//! 画像URLの書き換え
//!
//! 旧ホスト `trakt.us` を `trakt.tv` に置き換え、`http://` を `https://` にする。

use crate::types::Show;

const DEPRECATED_HOST: &str = "trakt.us";
const CURRENT_HOST: &str = "trakt.tv";

/// 画像URLを現行ホスト・HTTPSに書き換える（冪等）
pub fn secure_image_url(url: &str) -> String {
    let url = url.trim().replace(DEPRECATED_HOST, CURRENT_HOST);
    match url.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http://") => format!("https://{}", &url[7..]),
        _ => url,
    }
}

/// Showの全画像URLを書き換える
pub fn rewrite_images(show: &mut Show) {
    for url in show.images.values_mut() {
        *url = secure_image_url(url);
    }
}
