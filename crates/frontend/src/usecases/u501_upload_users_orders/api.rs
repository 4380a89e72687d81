use contracts::shared::error::ApiError;
use contracts::usecases::u501_upload_users_orders::{UploadKind, UploadResponse};
use web_sys::{File, FormData};

use crate::shared::http::post_form;

/// Multipart upload with `file` and `type` fields.
pub async fn upload_csv(kind: UploadKind, file: &File) -> Result<String, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_str("type", kind.as_str())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let response = post_form::<Option<UploadResponse>>("/api/upload-users-orders", form).await?;
    response.unwrap_or_default().into_result(kind)
}
