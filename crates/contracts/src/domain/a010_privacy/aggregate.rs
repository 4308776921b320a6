use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{DESCRIPTION, TITLE};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacySection {
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
}

impl Resource for PrivacySection {
    const KIND: ResourceKind = ResourceKind::Privacy;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", TITLE, FieldKind::Text).localized().required().listed(),
    FieldSpec::new("description", DESCRIPTION, FieldKind::Html).localized(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Privacy,
    path: "privacy",
    title: Tr::new("Gizlinlik syýasaty", "Privacy policy", "Политика конфиденциальности"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
