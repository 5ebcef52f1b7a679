//! 통합 테스트 공용 헬퍼
//!
//! 인메모리 SQLite에 운영과 동일한 스키마를 만들고 실제 라우터를 그대로 호출합니다.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveTime};
use http_body_util::BodyExt;
use party_app::config::create_tables;
use party_app::domain::gift::entity::gift;
use party_app::domain::guest::entity::guest;
use party_app::domain::party::entity::party;
use party_app::state::AppState;
use party_app::utils::template::Templates;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub async fn setup() -> TestApp {
    // 인메모리 DB는 커넥션마다 분리되므로 풀을 1개로 고정
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("failed to open sqlite in-memory database");
    create_tables(&db).await.expect("failed to create tables");

    let state = AppState {
        db: db.clone(),
        templates: Templates::new().expect("templates should parse"),
    };

    TestApp {
        router: party_app::app(state),
        db,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn form(&self, method: &str, uri: &str, body: &str) -> TestResponse {
        self.send(form_request(method, uri, body)).await
    }
}

pub fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ===== Fixtures =====

pub async fn create_party(db: &DatabaseConnection, venue: &str, date: &str) -> party::Model {
    party::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        party_date: Set(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap()),
        party_time: Set(NaiveTime::from_hms_opt(19, 0, 0).unwrap()),
        invitation: Set("You are warmly invited to join us!".to_string()),
        venue: Set(venue.to_string()),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_gift(
    db: &DatabaseConnection,
    party: &party::Model,
    name: &str,
    price: Decimal,
) -> gift::Model {
    gift::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        gift_name: Set(name.to_string()),
        price: Set(price),
        link: Set(None),
        party_id: Set(party.uuid),
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_guest(
    db: &DatabaseConnection,
    party: &party::Model,
    name: &str,
    attending: bool,
) -> guest::Model {
    guest::ActiveModel {
        uuid: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        attending: Set(attending),
        party_id: Set(party.uuid),
    }
    .insert(db)
    .await
    .unwrap()
}
