use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::utils::htmx::is_htmx_request;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 요청마다 부여되는 추적 ID (핸들러에서 `Extension<RequestId>`로 꺼낼 수 있음)
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청 ID를 전파(없으면 생성)하고, 요청 span 안에서 처리 결과를 기록합니다.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let partial = is_htmx_request(request.headers());
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri().path(),
        htmx = partial,
    );

    let start = Instant::now();

    async move {
        let mut response = next.run(request).await;

        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            status = response.status().as_u16(),
            "request completed"
        );

        let header_value = HeaderValue::from_str(&request_id)
            .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
        response
    }
    .instrument(span)
    .await
}
