//! テスト用のローカルHTTPサーバー
//!
//! ループバックで待ち受け、パスに応じた固定レスポンスを返す。

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub struct MockServer {
    pub base: String,
    /// 受け付けたリクエストのパス
    pub requests: Arc<Mutex<Vec<String>>>,
}

type Route = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    route: Route,
    seen: Arc<Mutex<Vec<String>>>,
}

/// `route` は (パス) → (ステータス, ボディ) を返す
pub async fn start<F>(route: F) -> MockServer
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");
    let requests = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        route: Arc::new(route),
        seen: requests.clone(),
    };
    let app = Router::new().fallback(respond).with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockServer {
        base: format!("http://{}/api/v2", addr),
        requests,
    }
}

async fn respond(State(state): State<MockState>, uri: Uri) -> impl IntoResponse {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.seen.lock().unwrap().push(path.clone());

    let (status, body) = (state.route)(&path);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// 一覧レスポンスを作る（全 `total` 件のうち offset から limit 件）
pub fn listing_body(names: &[&str], limit: usize, offset: usize) -> String {
    let results: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(i, n)| {
            serde_json::json!({
                "name": n,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
            })
        })
        .collect();
    let next = if offset + limit < names.len() {
        serde_json::Value::String(format!(
            "https://pokeapi.co/api/v2/pokemon/?offset={}&limit={}",
            offset + limit,
            limit
        ))
    } else {
        serde_json::Value::Null
    };
    serde_json::json!({
        "count": names.len(),
        "next": next,
        "previous": null,
        "results": results,
    })
    .to_string()
}

/// クエリ文字列から数値パラメータを取り出す
pub fn query_param(path: &str, key: &str) -> Option<usize> {
    path.split('?')
        .nth(1)?
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
}
