//! カタログAPI呼び出し（fetch）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use series_catalog_common::{Error, Show};

/// `GET {url}` でシリーズ一覧を取得
pub async fn fetch_shows(url: &str) -> Result<Vec<Show>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let error = Error::Http { status: resp.status() };
        return Err(JsValue::from_str(&error.to_string()));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let shows: Vec<Show> = serde_wasm_bindgen::from_value(json)?;
    Ok(shows)
}

/// JsValueのエラーを表示用の文字列にする
pub fn error_message(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}
