use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{DESCRIPTION, IMAGE, TITLE};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{
    FieldKind, FieldSpec, Lang, Resource, ResourceDef, ResourceKind, Tr,
};

// ============================================================================
// Record
// ============================================================================

/// Тур: основная сущность сайта
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_ru: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_ru: String,

    #[serde(default)]
    pub image: Option<String>,
}

impl Tour {
    /// Tour title in `lang`, falling back to any filled translation.
    pub fn title(&self, lang: Lang) -> &str {
        crate::domain::common::lang::pick_localized(
            &[
                (Lang::Tm, self.title_tm.as_str()),
                (Lang::En, self.title_en.as_str()),
                (Lang::Ru, self.title_ru.as_str()),
            ],
            lang,
        )
    }
}

impl Resource for Tour {
    const KIND: ResourceKind = ResourceKind::Tours;

    fn id(&self) -> i64 {
        self.id
    }
}

// ============================================================================
// Schema
// ============================================================================

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", TITLE, FieldKind::Text)
        .localized()
        .required()
        .listed(),
    FieldSpec::new("description", DESCRIPTION, FieldKind::Html).localized(),
    FieldSpec::new("image", IMAGE, FieldKind::Image).listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Tours,
    path: "tours",
    title: Tr::new("Turlar", "Tours", "Туры"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_has_no_id() {
        let tour = Tour {
            title_en: "Ashgabat city tour".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&tour).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title_en"], "Ashgabat city tour");
    }

    #[test]
    fn test_title_fallback() {
        let tour = Tour {
            id: 1,
            title_ru: "Дарваза".into(),
            ..Default::default()
        };
        assert_eq!(tour.title(Lang::En), "Дарваза");
    }
}
