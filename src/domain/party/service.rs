use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use super::dto::NewParty;
use super::entity::party;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct PartyService;

impl PartyService {
    /// 전체 파티 목록 (날짜, 시간 순)
    pub async fn list_parties(state: &AppState) -> Result<Vec<party::Model>, AppError> {
        let parties = party::Entity::find()
            .order_by_asc(party::Column::PartyDate)
            .order_by_asc(party::Column::PartyTime)
            .all(&state.db)
            .await?;

        Ok(parties)
    }

    /// 파티 단건 조회
    pub async fn get_party(state: &AppState, party_id: Uuid) -> Result<party::Model, AppError> {
        party::Entity::find_by_id(party_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::PartyNotFound("Party not found.".to_string()))
    }

    /// 파티 생성
    pub async fn create_party(state: &AppState, new_party: NewParty) -> Result<party::Model, AppError> {
        let party_model = party::ActiveModel {
            uuid: Set(Uuid::new_v4()),
            party_date: Set(new_party.party_date),
            party_time: Set(new_party.party_time),
            invitation: Set(new_party.invitation),
            venue: Set(new_party.venue),
        };

        let party = party_model.insert(&state.db).await?;

        info!(party_id = %party.uuid, venue = %party.venue, "Party created");

        Ok(party)
    }
}
