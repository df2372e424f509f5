// 图片上传/删除服务

use crate::error::ActionError;
use crate::models::{ImageUpload, UploadedImage};
use crate::services::ApiClient;

/// 图片上传与删除的固定后端路径
pub const IMAGES_PATH: &str = "/uploads/images";

/// 图片服务
pub struct ImageService {
    client: ApiClient,
}

impl ImageService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 上传图片表单
    ///
    /// POST /api/v1/uploads/images
    pub async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedImage, ActionError> {
        let size = upload.body.len();
        self.client
            .post_raw::<UploadedImage>(IMAGES_PATH, &upload.content_type, upload.body)
            .await
            .map(|image| {
                log::info!("Uploaded image form ({} bytes)", size);
                image
            })
            .map_err(|e| {
                log::error!("Image upload failed: {}", e);
                ActionError::ImageUploadFailed
            })
    }

    /// 删除图片
    ///
    /// DELETE /api/v1/uploads/images，请求体为只含一个 public id 的JSON数组
    pub async fn delete_image(&self, public_id: &str) -> Result<(), ActionError> {
        let _: serde_json::Value = self
            .client
            .delete_with_body(IMAGES_PATH, &[public_id])
            .await
            .map_err(|e| {
                log::error!("Image delete for {} failed: {}", public_id, e);
                ActionError::ImageDeleteFailed
            })?;

        log::info!("Deleted image {}", public_id);
        Ok(())
    }
}
