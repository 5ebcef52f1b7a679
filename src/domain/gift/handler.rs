use axum::{
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::Form;
use uuid::Uuid;

use super::dto::{GiftForm, GiftItem};
use super::entity::gift;
use super::service::GiftService;
use crate::context;
use crate::domain::party::service::PartyService;
use crate::state::AppState;
use crate::utils::error::AppError;

fn to_items(gifts: Vec<gift::Model>) -> Vec<GiftItem> {
    gifts.into_iter().map(GiftItem::from).collect()
}

/// 선물 목록 페이지
pub async fn gift_registry_page(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let (party, gifts) = GiftService::list_gifts(&state, party_id).await?;

    state.templates.render(
        "gift_registry/page_gift_registry.html",
        &context! { party: party, gifts: to_items(gifts) },
    )
}

/// 선물 단건 조회 (수정 취소 시 사용)
pub async fn gift_detail_partial(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(Uuid, Uuid)>,
) -> Result<Html<String>, AppError> {
    let gift = GiftService::get_gift(&state, party_id, gift_id).await?;

    state.templates.render(
        "gift_registry/partial_gift_detail.html",
        &context! { gift: GiftItem::from(gift) },
    )
}

/// 선물 수정 폼
pub async fn gift_update_partial(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(Uuid, Uuid)>,
) -> Result<Html<String>, AppError> {
    let gift = GiftService::get_gift(&state, party_id, gift_id).await?;

    state.templates.render(
        "gift_registry/partial_gift_update.html",
        &context! { gift: GiftItem::from(gift), party_id: party_id },
    )
}

/// 선물 수정 저장
pub async fn gift_update_save_partial(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(Uuid, Uuid)>,
    Form(form): Form<GiftForm>,
) -> Result<Html<String>, AppError> {
    let input = form.into_input()?;
    let gift = GiftService::update_gift(&state, party_id, gift_id, input).await?;

    state.templates.render(
        "gift_registry/partial_gift_detail.html",
        &context! { gift: GiftItem::from(gift) },
    )
}

/// 선물 등록 폼
pub async fn gift_create_partial(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let party = PartyService::get_party(&state, party_id).await?;

    state.templates.render(
        "gift_registry/partial_gift_create.html",
        &context! { party_id: party.uuid },
    )
}

/// 선물 등록 후 목록 갱신
pub async fn gift_create_save_partial(
    State(state): State<AppState>,
    Path(party_id): Path<Uuid>,
    Form(form): Form<GiftForm>,
) -> Result<Html<String>, AppError> {
    let input = form.into_input()?;
    GiftService::create_gift(&state, party_id, input).await?;

    let (_, gifts) = GiftService::list_gifts(&state, party_id).await?;

    state.templates.render(
        "gift_registry/partial_gift_list.html",
        &context! { gifts: to_items(gifts) },
    )
}

/// 선물 삭제 후 목록 갱신
pub async fn gift_delete_partial(
    State(state): State<AppState>,
    Path((party_id, gift_id)): Path<(Uuid, Uuid)>,
) -> Result<Html<String>, AppError> {
    GiftService::delete_gift(&state, party_id, gift_id).await?;

    let (_, gifts) = GiftService::list_gifts(&state, party_id).await?;

    state.templates.render(
        "gift_registry/partial_gift_list.html",
        &context! { gifts: to_items(gifts) },
    )
}
