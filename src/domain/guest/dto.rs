use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// 참석 여부 일괄 변경 폼 (`guest_ids`가 반복 키로 전달됨)
#[derive(Debug, Deserialize)]
pub struct GuestIdsForm {
    #[serde(default)]
    pub guest_ids: Vec<Uuid>,
}

/// 게스트 이름 검색 폼
#[derive(Debug, Deserialize)]
pub struct GuestSearchForm {
    #[serde(default)]
    pub guest_search: String,
}

/// 게스트 추가 폼
#[derive(Debug, Deserialize, Validate)]
pub struct GuestForm {
    #[validate(length(min = 1, max = 100, message = "Guest name must be 1 to 100 characters."))]
    pub name: String,
}

impl GuestForm {
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}
