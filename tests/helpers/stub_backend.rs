// ABOUTME: Axum stub of the recipe backend for integration tests
// ABOUTME: Serves scripted replies per endpoint on a loopback port and records every request

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use recipe_picker::constants::endpoints;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One scripted HTTP reply
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl StubReply {
    /// `200` with a JSON body
    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// JSON body with any status
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    /// Plain text body with any status
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_owned(),
        }
    }
}

/// A request the stub received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: Method,
    /// Request path
    pub path: String,
    /// Raw query string
    pub query: Option<String>,
    /// JSON body, when the body parsed as JSON
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// `ingredients` array of a POST body
    pub fn ingredients(&self) -> Vec<String> {
        self.body
            .as_ref()
            .and_then(|body| body.get("ingredients"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct Shared {
    replies: Mutex<HashMap<String, VecDeque<StubReply>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Builder for [`StubBackend`]
#[derive(Default)]
pub struct StubBackendBuilder {
    replies: HashMap<String, VecDeque<StubReply>>,
}

impl StubBackendBuilder {
    /// Queue a reply for `path`; the last queued reply repeats forever
    pub fn reply(mut self, path: &str, reply: StubReply) -> Self {
        self.replies
            .entry(path.to_owned())
            .or_default()
            .push_back(reply);
        self
    }

    /// Queue a reply for the ingredient suggestion endpoint
    pub fn ingredients(self, reply: StubReply) -> Self {
        self.reply(endpoints::INGREDIENTS, reply)
    }

    /// Queue a reply for the recipe generation endpoint
    pub fn generate(self, reply: StubReply) -> Self {
        self.reply(endpoints::GENERATE_RECIPE, reply)
    }

    /// Queue a reply for the similar recipes endpoint
    pub fn similar(self, reply: StubReply) -> Self {
        self.reply(endpoints::SIMILAR_RECIPES, reply)
    }

    /// Bind to a free loopback port and start serving
    pub async fn start(self) -> StubBackend {
        let shared = Arc::new(Shared {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&shared));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend");
        let addr = listener.local_addr().expect("stub backend address");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub backend server");
        });

        StubBackend {
            addr,
            shared,
            server,
        }
    }
}

/// Running stub backend
pub struct StubBackend {
    addr: SocketAddr,
    shared: Arc<Shared>,
    server: JoinHandle<()>,
}

impl StubBackend {
    /// Start configuring a stub
    pub fn builder() -> StubBackendBuilder {
        StubBackendBuilder::default()
    }

    /// Base URL to point the client at
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request received, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// Requests received on `path`
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_owned();
    shared.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        query: uri.query().map(str::to_owned),
        body: serde_json::from_slice(&body).ok(),
    });

    let reply = {
        let mut replies = shared.replies.lock().unwrap();
        replies.get_mut(&path).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };

    let reply = reply.unwrap_or_else(|| StubReply::json(404, json!({"error": "not found"})));
    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, reply.content_type)],
        reply.body,
    )
        .into_response()
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Recipe body with one ingredient and one instruction
pub fn recipe_json(title: &str, ingredient: &str) -> Value {
    json!({
        "title": title,
        "description": "Quick and simple",
        "cook_time": "25 minutes",
        "servings": 2,
        "difficulty": "Easy",
        "ingredients": [ingredient],
        "instructions": ["Cook everything together"]
    })
}
