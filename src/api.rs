//! JSONPlaceholder REST Client
//!
//! Thin async wrappers over the browser fetch API.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Article, ArticleParams};

const BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Any transport problem or status >= 400 surfaces as this message.
const CONNECT_ERROR: &str = "Failed to connect";

pub async fn fetch_articles() -> Result<Vec<Article>, String> {
    request("", "GET", None).await
}

pub async fn create_article(params: &ArticleParams) -> Result<Article, String> {
    let body = serde_json::to_string(params).map_err(|e| e.to_string())?;
    request("", "POST", Some(body)).await
}

pub async fn update_article(article: &Article) -> Result<Article, String> {
    let body = serde_json::to_string(article).map_err(|e| e.to_string())?;
    request(&format!("/{}", article.id), "PUT", Some(body)).await
}

async fn request<T: DeserializeOwned>(
    path: &str,
    method: &str,
    body: Option<String>,
) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&format!("{}{}", BASE_URL, path), &opts)
        .map_err(|_| CONNECT_ERROR.to_string())?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| CONNECT_ERROR.to_string())?;

    let window = web_sys::window().ok_or_else(|| CONNECT_ERROR.to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| CONNECT_ERROR.to_string())?;
    let response: Response = response.dyn_into().map_err(|_| CONNECT_ERROR.to_string())?;
    if response.status() >= 400 {
        return Err(CONNECT_ERROR.to_string());
    }

    let json = JsFuture::from(response.json().map_err(|_| CONNECT_ERROR.to_string())?)
        .await
        .map_err(|_| CONNECT_ERROR.to_string())?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
