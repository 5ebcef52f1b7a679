use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::entity::gift;
use crate::utils::error::AppError;

pub const PRICE_MAX_SCALE: u32 = 2;
/// `DECIMAL(10,2)` 컬럼의 정수부는 8자리까지
pub const PRICE_UPPER_BOUND: i64 = 100_000_000;

/// 선물 생성/수정 폼
#[derive(Debug, Deserialize, Validate)]
pub struct GiftForm {
    #[validate(length(min = 1, max = 100, message = "Gift name must be 1 to 100 characters."))]
    pub gift_name: String,
    pub price: String,
    #[serde(default)]
    #[validate(url(message = "Link must be a valid URL."))]
    pub link: Option<String>,
}

/// 검증을 통과한 선물 입력값
#[derive(Debug, Clone, PartialEq)]
pub struct GiftInput {
    pub gift_name: String,
    pub price: Decimal,
    pub link: Option<String>,
}

impl GiftForm {
    pub fn into_input(self) -> Result<GiftInput, AppError> {
        let form = GiftForm {
            gift_name: self.gift_name.trim().to_string(),
            price: self.price,
            link: self
                .link
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
        };
        form.validate()?;

        let price = parse_price(&form.price)?;
        if let Some(link) = &form.link {
            ensure_web_link(link)?;
        }

        Ok(GiftInput {
            gift_name: form.gift_name,
            price,
            link: form.link,
        })
    }
}

/// 링크는 http(s)만 허용합니다. `href`로 렌더링되므로 `javascript:` 등은 거부합니다.
fn ensure_web_link(link: &str) -> Result<(), AppError> {
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::validation_error(
            "Link must start with http:// or https://.",
        ))
    }
}

/// 가격 문자열을 파싱합니다. 음수, 상한 이상, 소수점 셋째 자리 이상은 거부합니다.
pub fn parse_price(raw: &str) -> Result<Decimal, AppError> {
    let price = Decimal::from_str(raw.trim())
        .map_err(|_| AppError::validation_error("Price must be a number."))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::validation_error("Price must be zero or greater."));
    }
    if price >= Decimal::from(PRICE_UPPER_BOUND) {
        return Err(AppError::validation_error(
            "Price must be less than 100000000.",
        ));
    }
    if price.normalize().scale() > PRICE_MAX_SCALE {
        return Err(AppError::validation_error(
            "Price can have at most two decimal places.",
        ));
    }

    Ok(price.round_dp(PRICE_MAX_SCALE))
}

/// 템플릿 렌더링용 선물 항목
#[derive(Debug, Serialize)]
pub struct GiftItem {
    pub uuid: Uuid,
    pub gift_name: String,
    /// 항상 소수점 둘째 자리까지 표시 (예: "12.50")
    pub price: String,
    /// 링크가 없으면 빈 문자열
    pub link: String,
    pub party_id: Uuid,
}

impl From<gift::Model> for GiftItem {
    fn from(model: gift::Model) -> Self {
        Self {
            uuid: model.uuid,
            gift_name: model.gift_name,
            price: format!("{:.2}", model.price.round_dp(PRICE_MAX_SCALE)),
            link: model.link.unwrap_or_default(),
            party_id: model.party_id,
        }
    }
}
