use contracts::domain::a004_student::aggregate::{
    GenerateCertificateRequest, GenerateCertificateResponse, InsertPasswordRequest,
    SendCertificateRequest, SendCertificateResponse, Student,
};
use contracts::shared::error::ApiError;

use crate::shared::api_utils::api_url;
use crate::shared::http::{get_json, post_json};

pub async fn fetch_students() -> Result<Vec<Student>, ApiError> {
    get_json("/api/studentDataCoursePurchased").await
}

/// Store the login password and mail it to the student.
pub async fn send_password(request: &InsertPasswordRequest) -> Result<(), ApiError> {
    post_json::<_, serde_json::Value>("/api/insertStudentPassword", request)
        .await
        .map(|_| ())
}

pub async fn generate_certificate(
    request: &GenerateCertificateRequest,
) -> Result<GenerateCertificateResponse, ApiError> {
    post_json::<_, Option<GenerateCertificateResponse>>("/api/generateCertificate", request)
        .await
        .map(Option::unwrap_or_default)
}

/// Mail the generated certificate; `success: false` is an error.
pub async fn send_certificate(request: &SendCertificateRequest) -> Result<(), ApiError> {
    post_json::<_, Option<SendCertificateResponse>>("/api/send-certificate", request)
        .await?
        .unwrap_or_default()
        .into_result()
}

/// Public link of a generated certificate PDF
pub fn certificate_pdf_url(file: &str) -> String {
    api_url(&format!("/certificates/generated/{}", file))
}
