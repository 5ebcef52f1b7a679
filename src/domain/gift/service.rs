use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use super::dto::GiftInput;
use super::entity::gift;
use crate::domain::party::entity::party;
use crate::domain::party::service::PartyService;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct GiftService;

impl GiftService {
    /// 파티와 해당 파티의 선물 목록 (이름 순)
    pub async fn list_gifts(
        state: &AppState,
        party_id: Uuid,
    ) -> Result<(party::Model, Vec<gift::Model>), AppError> {
        let party = PartyService::get_party(state, party_id).await?;

        let gifts = party
            .find_related(gift::Entity)
            .order_by_asc(gift::Column::GiftName)
            .order_by_asc(gift::Column::Uuid)
            .all(&state.db)
            .await?;

        Ok((party, gifts))
    }

    /// 선물 단건 조회. 다른 파티의 선물이면 찾지 못한 것으로 처리합니다.
    pub async fn get_gift(
        state: &AppState,
        party_id: Uuid,
        gift_id: Uuid,
    ) -> Result<gift::Model, AppError> {
        gift::Entity::find_by_id(gift_id)
            .filter(gift::Column::PartyId.eq(party_id))
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::GiftNotFound("Gift not found.".to_string()))
    }

    /// 선물 등록
    pub async fn create_gift(
        state: &AppState,
        party_id: Uuid,
        input: GiftInput,
    ) -> Result<gift::Model, AppError> {
        // FK 제약과 별개로 없는 파티는 404로 응답
        PartyService::get_party(state, party_id).await?;

        let gift_model = gift::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            gift_name: Set(input.gift_name),
            price: Set(input.price),
            link: Set(input.link),
            party_id: Set(party_id),
        };

        let gift = gift_model.insert(&state.db).await?;

        info!(party_id = %party_id, gift_id = %gift.uuid, "Gift created");

        Ok(gift)
    }

    /// 선물 수정. 이름, 가격, 링크만 변경되며 식별자와 소속 파티는 유지됩니다.
    pub async fn update_gift(
        state: &AppState,
        party_id: Uuid,
        gift_id: Uuid,
        input: GiftInput,
    ) -> Result<gift::Model, AppError> {
        let gift = Self::get_gift(state, party_id, gift_id).await?;

        let mut gift_model: gift::ActiveModel = gift.into();
        gift_model.gift_name = Set(input.gift_name);
        gift_model.price = Set(input.price);
        gift_model.link = Set(input.link);

        let gift = gift_model.update(&state.db).await?;

        info!(party_id = %party_id, gift_id = %gift_id, "Gift updated");

        Ok(gift)
    }

    /// 선물 삭제
    pub async fn delete_gift(state: &AppState, party_id: Uuid, gift_id: Uuid) -> Result<(), AppError> {
        let gift = Self::get_gift(state, party_id, gift_id).await?;

        gift.delete(&state.db).await?;

        info!(party_id = %party_id, gift_id = %gift_id, "Gift deleted");

        Ok(())
    }
}
