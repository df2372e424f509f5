// 错误类型定义
// API客户端错误与业务动作错误，以及到HTTP响应的映射

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::models::ErrorBody;

/// 后端API调用错误
#[derive(Error, Debug)]
pub enum ApiError {
    /// 网络或传输层错误
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// 后端返回非2xx状态
    #[error("Backend responded {status} for {path}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },

    /// 路径段不能安全拼入后端URL
    #[error("Invalid path segment {segment:?}")]
    InvalidSegment {
        segment: String,
    },

    /// 响应体与预期结构不符
    #[error("Unexpected response payload from {path}: {message}")]
    Decode {
        path: String,
        message: String,
    },
}

impl ApiError {
    /// 后端返回的HTTP状态码 (如果有)
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_invalid_segment(&self) -> bool {
        matches!(self, ApiError::InvalidSegment { .. })
    }
}

/// 业务动作错误
///
/// 具体动作失败时只暴露固定提示文案，后端细节仅写入日志。
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Payment initiation failed")]
    PaymentFailed,

    #[error("Address validation failed")]
    AddressValidationFailed,

    #[error("Failed to upload image")]
    ImageUploadFailed,

    #[error("Failed to delete image")]
    ImageDeleteFailed,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Failed to load countries")]
    CountriesUnavailable,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ResponseError for ActionError {
    fn status_code(&self) -> StatusCode {
        match self {
            ActionError::OrderNotFound => StatusCode::NOT_FOUND,
            ActionError::Api(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ActionError::Api(e) if e.is_invalid_segment() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
