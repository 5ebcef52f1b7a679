use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use uuid::Uuid;

use super::dto::PartyForm;
use super::service::PartyService;
use crate::context;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::htmx::{is_htmx_request, HX_REDIRECT};

/// 파티 목록 페이지
pub async fn party_list_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let parties = PartyService::list_parties(&state).await?;

    state
        .templates
        .render("party/page_party_list.html", &context! { parties: parties })
}

/// 파티 상세 페이지
pub async fn party_detail_page(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let party = PartyService::get_party(&state, party_id).await?;

    state
        .templates
        .render("party/page_party_detail.html", &context! { party: party })
}

/// 파티 생성 폼 페이지
pub async fn new_party_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state
        .templates
        .render("party/page_new_party.html", &context! {})
}

/// 파티 생성
///
/// htmx 요청이면 `HX-Redirect` 헤더로, 일반 폼 제출이면 303으로 상세 페이지로 이동시킵니다.
pub async fn create_party(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PartyForm>,
) -> Result<Response, AppError> {
    let new_party = form.into_new_party()?;
    let party = PartyService::create_party(&state, new_party).await?;

    let location = format!("/party/{}", party.uuid);
    if is_htmx_request(&headers) {
        Ok((StatusCode::OK, [(HX_REDIRECT, location)]).into_response())
    } else {
        Ok(Redirect::to(&location).into_response())
    }
}
