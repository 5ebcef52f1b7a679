use std::net::SocketAddr;

use party_app::config::{establish_connection, AppConfig};
use party_app::shutdown::shutdown_signal;
use party_app::state::AppState;
use party_app::utils::logging::init_logging;
use party_app::utils::template::Templates;
use party_app::app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // 2. 로깅 초기화 (guard는 main 종료까지 유지)
    let _log_guard = init_logging(&config.log_dir);

    // 3. DB 연결 및 템플릿 로드
    let db = establish_connection(&config).await?;
    let templates = Templates::new()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = AppState { db, templates };

    // 4. 서버 실행
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
