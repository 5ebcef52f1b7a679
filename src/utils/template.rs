//! HTML 템플릿 렌더링
//!
//! 템플릿은 컴파일 시점에 바이너리에 포함되며, 기동 시 한 번 파싱되어 `AppState`에 공유됩니다.
//! `page_*` 템플릿은 `base.html`을 확장한 전체 페이지, `partial_*` 템플릿은 htmx가 교체하는 조각입니다.

use std::sync::Arc;

use axum::response::Html;
use tera::{Context, Tera};

use super::error::AppError;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    (
        "party/page_party_list.html",
        include_str!("../../templates/party/page_party_list.html"),
    ),
    (
        "party/page_party_detail.html",
        include_str!("../../templates/party/page_party_detail.html"),
    ),
    (
        "party/page_new_party.html",
        include_str!("../../templates/party/page_new_party.html"),
    ),
    (
        "gift_registry/page_gift_registry.html",
        include_str!("../../templates/gift_registry/page_gift_registry.html"),
    ),
    (
        "gift_registry/partial_gift_list.html",
        include_str!("../../templates/gift_registry/partial_gift_list.html"),
    ),
    (
        "gift_registry/partial_gift_detail.html",
        include_str!("../../templates/gift_registry/partial_gift_detail.html"),
    ),
    (
        "gift_registry/partial_gift_update.html",
        include_str!("../../templates/gift_registry/partial_gift_update.html"),
    ),
    (
        "gift_registry/partial_gift_create.html",
        include_str!("../../templates/gift_registry/partial_gift_create.html"),
    ),
    (
        "guest_list/page_guest_list.html",
        include_str!("../../templates/guest_list/page_guest_list.html"),
    ),
    (
        "guest_list/partial_guest_list.html",
        include_str!("../../templates/guest_list/partial_guest_list.html"),
    ),
];

/// Builds a `tera::Context` from `key: value` pairs.
///
/// ```ignore
/// let ctx = context! { party: party, gifts: gifts };
/// ```
#[macro_export]
macro_rules! context {
    ($($key:ident : $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut ctx = ::tera::Context::new();
        $( ctx.insert(stringify!($key), &$value); )*
        ctx
    }};
}

#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates")
            .field("count", &self.tera.get_template_names().count())
            .finish()
    }
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// 템플릿을 렌더링하여 HTML 응답으로 반환
    pub fn render(&self, name: &str, context: &Context) -> Result<Html<String>, AppError> {
        let html = self.tera.render(name, context)?;
        Ok(Html(html))
    }
}
