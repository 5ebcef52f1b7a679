use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    PartyNotFound(String),
    #[error("{0}")]
    GiftNotFound(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::InternalError(_) => "Something went wrong, please try again.".to_string(),
            other => other.to_string(),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "COMMON400",
            AppError::NotFound(_) => "COMMON404",
            AppError::PartyNotFound(_) => "PARTY404",
            AppError::GiftNotFound(_) => "GIFT404",
            AppError::InternalError(_) => "COMMON500",
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::PartyNotFound(_) | AppError::GiftNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        match &self {
            AppError::InternalError(detail) => {
                error!(error_code, "Internal Server Error: {}", detail);
            }
            _ => {
                error!("Error [{}]: {}", error_code, message);
            }
        }

        // htmx swaps this fragment into the page's error target
        let body = format!(
            r#"<div class="alert alert-error" role="alert" data-error-code="{}">{}</div>"#,
            error_code,
            tera::escape_html(&message)
        );

        (status, Html(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().copied().collect();
        fields.sort_unstable();

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|field| {
                field_errors[field].iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();

        AppError::ValidationError(messages.join(" "))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::InternalError(format!("Template rendering failed: {:?}", err))
    }
}

impl AppError {
    pub fn validation_error(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }
}

/// 매칭되는 라우트가 없을 때의 응답
pub async fn not_found_fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}.", uri.path()))
}
