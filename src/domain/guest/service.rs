use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use super::entity::guest;
use crate::domain::party::service::PartyService;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct GuestService;

impl GuestService {
    /// 파티의 게스트 목록 (이름 순)
    pub async fn list_guests(state: &AppState, party_id: Uuid) -> Result<Vec<guest::Model>, AppError> {
        let guests = guest::Entity::find()
            .filter(guest::Column::PartyId.eq(party_id))
            .order_by_asc(guest::Column::Name)
            .order_by_asc(guest::Column::Uuid)
            .all(&state.db)
            .await?;

        Ok(guests)
    }

    /// 파티 존재 여부를 확인한 뒤 게스트 목록을 반환합니다.
    pub async fn list_guests_for_page(
        state: &AppState,
        party_id: Uuid,
    ) -> Result<Vec<guest::Model>, AppError> {
        PartyService::get_party(state, party_id).await?;
        Self::list_guests(state, party_id).await
    }

    /// 게스트 추가 (기본값: 불참)
    pub async fn create_guest(
        state: &AppState,
        party_id: Uuid,
        name: String,
    ) -> Result<guest::Model, AppError> {
        PartyService::get_party(state, party_id).await?;

        let guest_model = guest::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            name: Set(name),
            attending: Set(false),
            party_id: Set(party_id),
        };

        let guest = guest_model.insert(&state.db).await?;

        info!(party_id = %party_id, guest_id = %guest.uuid, "Guest added");

        Ok(guest)
    }

    /// 선택한 게스트들의 참석 여부를 일괄 변경하고, 파티의 전체 게스트 목록을 반환합니다.
    ///
    /// 다른 파티에 속한 게스트 ID는 무시됩니다.
    pub async fn set_attending(
        state: &AppState,
        party_id: Uuid,
        guest_ids: &[Uuid],
        attending: bool,
    ) -> Result<Vec<guest::Model>, AppError> {
        PartyService::get_party(state, party_id).await?;

        if !guest_ids.is_empty() {
            let result = guest::Entity::update_many()
                .col_expr(guest::Column::Attending, Expr::value(attending))
                .filter(guest::Column::PartyId.eq(party_id))
                .filter(guest::Column::Uuid.is_in(guest_ids.iter().copied()))
                .exec(&state.db)
                .await?;

            info!(
                party_id = %party_id,
                attending,
                requested = guest_ids.len(),
                updated = result.rows_affected,
                "Guest attendance updated"
            );
        }

        Self::list_guests(state, party_id).await
    }

    /// 이름에 검색어가 포함된 게스트 (대소문자 무시)
    ///
    /// SQLite의 `lower()`는 ASCII만 변환하므로 비교는 애플리케이션에서 합니다.
    pub async fn filter_guests(
        state: &AppState,
        party_id: Uuid,
        search: &str,
    ) -> Result<Vec<guest::Model>, AppError> {
        PartyService::get_party(state, party_id).await?;

        let guests = Self::list_guests(state, party_id).await?;
        Ok(matching_guests(guests, search))
    }
}

fn matching_guests(guests: Vec<guest::Model>, search: &str) -> Vec<guest::Model> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return guests;
    }

    guests
        .into_iter()
        .filter(|g| g.name.to_lowercase().contains(&needle))
        .collect()
}
