// 测试辅助
// 在本地随机端口启动一个假的后端服务，记录收到的请求并返回预设响应

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use actix_web::{dev::ServerHandle, http::header, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;
use crate::services::ApiClient;

/// 假后端收到的请求
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Vec<u8>,
    pub cookie: Option<String>,
    pub cache_control: Option<String>,
    pub content_type: Option<String>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    method: String,
    path: String,
    status: u16,
    content_type: String,
    body: String,
    set_cookies: Vec<String>,
}

#[derive(Default)]
struct Shared {
    routes: Mutex<Vec<CannedResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct FakeBackend {
    addr: SocketAddr,
    shared: Arc<Shared>,
    handle: ServerHandle,
}

impl FakeBackend {
    /// 启动假后端，需在 actix 运行时内调用
    pub fn start() -> Self {
        let shared = Arc::new(Shared::default());
        let data = web::Data::from(shared.clone());

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(handle_request))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind fake backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self { addr, shared, handle }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// 指向假后端的API客户端
    pub fn client(&self) -> ApiClient {
        ApiClient::with_http(reqwest::Client::new(), &self.url())
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) -> &Self {
        self.respond_with_cookies(method, path, status, body, &[])
    }

    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        self.push(method, path, status, "application/json", body.to_string(), &[])
    }

    /// 返回指定 Content-Type 的非JSON响应
    pub fn respond_typed(
        &self,
        method: &str,
        path: &str,
        status: u16,
        content_type: &str,
        body: &str,
    ) -> &Self {
        self.push(method, path, status, content_type, body.to_string(), &[])
    }

    pub fn respond_with_cookies(
        &self,
        method: &str,
        path: &str,
        status: u16,
        body: Value,
        cookies: &[&str],
    ) -> &Self {
        self.push(method, path, status, "application/json", body.to_string(), cookies)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    fn push(
        &self,
        method: &str,
        path: &str,
        status: u16,
        content_type: &str,
        body: String,
        cookies: &[&str],
    ) -> &Self {
        self.shared.routes.lock().unwrap().push(CannedResponse {
            method: method.to_string(),
            path: path.to_string(),
            status,
            content_type: content_type.to_string(),
            body,
            set_cookies: cookies.iter().map(|c| c.to_string()).collect(),
        });
        self
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        let handle = self.handle.clone();
        actix_web::rt::spawn(async move { handle.stop(false).await });
    }
}

async fn handle_request(req: HttpRequest, body: web::Bytes, shared: web::Data<Shared>) -> HttpResponse {
    let header_value = |name: header::HeaderName| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    shared.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        body: body.to_vec(),
        cookie: header_value(header::COOKIE),
        cache_control: header_value(header::CACHE_CONTROL),
        content_type: header_value(header::CONTENT_TYPE),
    });

    let canned = shared
        .routes
        .lock()
        .unwrap()
        .iter()
        .find(|r| r.method == req.method().as_str() && r.path == req.path())
        .cloned();

    match canned {
        Some(canned) => {
            let status = actix_web::http::StatusCode::from_u16(canned.status).unwrap();
            let mut builder = HttpResponse::build(status);
            for cookie in &canned.set_cookies {
                builder.append_header((header::SET_COOKIE, cookie.as_str()));
            }
            builder.content_type(canned.content_type).body(canned.body)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "message": "no canned response" })),
    }
}
