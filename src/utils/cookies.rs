// Cookie 转发工具函数
// 浏览器Cookie转发到后端，以及后端 Set-Cookie 写回浏览器响应

use actix_web::{
    http::{
        header::{self, HeaderValue},
        StatusCode,
    },
    HttpRequest, HttpResponse, HttpResponseBuilder,
};

/// 可写入 Set-Cookie 的响应头目标
///
/// 第一个值用 `set` 写入，之后的值用 `append` 追加。
pub trait SetCookieSink {
    fn set(&mut self, value: HeaderValue);
    fn append(&mut self, value: HeaderValue);
}

impl SetCookieSink for HttpResponseBuilder {
    fn set(&mut self, value: HeaderValue) {
        self.insert_header((header::SET_COOKIE, value));
    }

    fn append(&mut self, value: HeaderValue) {
        self.append_header((header::SET_COOKIE, value));
    }
}

/// 从HTTP请求中提取需要转发的Cookie
///
/// # Arguments
/// * `req` - 浏览器请求
///
/// # Returns
/// * Cookie 头部值，多个头部以 "; " 合并
pub fn forwarded_cookies(req: &HttpRequest) -> Option<String> {
    let cookies: Vec<&str> = req
        .headers()
        .get_all(header::COOKIE)
        .filter_map(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .collect();

    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}

/// 按接收顺序把 Set-Cookie 写入目标
///
/// # Returns
/// * 实际写入的数量 (非法头部值会被跳过)
pub fn propagate_set_cookies<S: SetCookieSink>(sink: &mut S, set_cookies: &[String]) -> usize {
    let mut written = 0;

    for cookie in set_cookies {
        let value = match HeaderValue::from_str(cookie) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Skipping invalid Set-Cookie value: {}", e);
                continue;
            }
        };

        if written == 0 {
            sink.set(value);
        } else {
            sink.append(value);
        }
        written += 1;
    }

    written
}

/// 用后端响应构建浏览器响应
///
/// 保留后端状态码、Content-Type 与响应体，并按原顺序携带全部 Set-Cookie。
/// 后端未给出 Content-Type 时不写该头部。
pub fn bridge_response(
    status: u16,
    content_type: Option<&str>,
    body: Vec<u8>,
    set_cookies: &[String],
) -> HttpResponse {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = HttpResponse::build(status);
    if let Some(value) = content_type.and_then(|v| HeaderValue::from_str(v).ok()) {
        builder.insert_header((header::CONTENT_TYPE, value));
    }

    propagate_set_cookies(&mut builder, set_cookies);

    builder.body(body)
}
