use axum::{
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::Form;
use uuid::Uuid;
use validator::Validate;

use super::dto::{GuestForm, GuestIdsForm, GuestSearchForm};
use super::entity::guest;
use super::service::GuestService;
use crate::context;
use crate::state::AppState;
use crate::utils::error::AppError;

const GUEST_LIST_PARTIAL: &str = "guest_list/partial_guest_list.html";

fn render_guest_list(state: &AppState, guests: Vec<guest::Model>) -> Result<Html<String>, AppError> {
    state
        .templates
        .render(GUEST_LIST_PARTIAL, &context! { guests: guests })
}

/// 게스트 목록 페이지
pub async fn guest_list_page(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let guests = GuestService::list_guests_for_page(&state, party_id).await?;

    state.templates.render(
        "guest_list/page_guest_list.html",
        &context! { guests: guests, party_id: party_id },
    )
}

/// 게스트 추가 후 목록 갱신
pub async fn guest_create_partial(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
    Form(form): Form<GuestForm>,
) -> Result<Html<String>, AppError> {
    let form = form.trimmed();
    form.validate()?;

    GuestService::create_guest(&state, party_id, form.name).await?;
    let guests = GuestService::list_guests(&state, party_id).await?;

    render_guest_list(&state, guests)
}

/// 선택한 게스트를 참석으로 변경하고 전체 목록 반환
pub async fn mark_guests_attending_partial(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
    Form(form): Form<GuestIdsForm>,
) -> Result<Html<String>, AppError> {
    let guests = GuestService::set_attending(&state, party_id, &form.guest_ids, true).await?;

    render_guest_list(&state, guests)
}

/// 선택한 게스트를 불참으로 변경하고 전체 목록 반환
pub async fn mark_guests_not_attending_partial(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
    Form(form): Form<GuestIdsForm>,
) -> Result<Html<String>, AppError> {
    let guests = GuestService::set_attending(&state, party_id, &form.guest_ids, false).await?;

    render_guest_list(&state, guests)
}

/// 이름으로 게스트 검색
pub async fn filter_guests_partial(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
    Form(form): Form<GuestSearchForm>,
) -> Result<Html<String>, AppError> {
    let guests = GuestService::filter_guests(&state, party_id, &form.guest_search).await?;

    state.templates.render(
        GUEST_LIST_PARTIAL,
        &context! { guests: guests, party_id: party_id },
    )
}
