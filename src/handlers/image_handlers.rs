// 图片API处理器
// 卖家后台商品图片的上传与删除

use actix_web::{http::header, web, HttpRequest, HttpResponse, Result as ActixResult};
use crate::models::{ErrorBody, ImageDeletion, ImageUpload};
use crate::services::ImageService;
use crate::state::AppState;
use crate::utils::forwarded_cookies;

/// 上传图片
///
/// POST /app/api/images
///
/// 请求体: multipart/form-data，原样转发给后端
pub async fn upload_image(
    data: web::Data<AppState>,
    body: web::Bytes,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let content_type = match req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(ct) if ct.starts_with("multipart/form-data") => ct.to_string(),
        _ => {
            return Ok(HttpResponse::BadRequest().json(ErrorBody::new("Expected multipart/form-data")));
        }
    };

    let image_service = ImageService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let uploaded = image_service
        .upload_image(ImageUpload {
            content_type,
            body: body.to_vec(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(uploaded))
}

/// 删除图片
///
/// DELETE /app/api/images
///
/// 请求体: `{"publicId": "..."}`
pub async fn delete_image(
    data: web::Data<AppState>,
    request: web::Json<ImageDeletion>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let image_service = ImageService::new(data.api.with_cookies(forwarded_cookies(&req)));
    image_service.delete_image(&request.public_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleted": request.public_id })))
}
