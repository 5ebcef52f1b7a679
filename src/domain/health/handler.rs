/// 헬스 체크
pub async fn health_check() -> &'static str {
    "OK"
}
