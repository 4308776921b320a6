use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{IMAGE, NAME};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_ru: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Resource for Partner {
    const KIND: ResourceKind = ResourceKind::Partners;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", NAME, FieldKind::Text).localized().required().listed(),
    FieldSpec::new("image", IMAGE, FieldKind::Image).listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Partners,
    path: "partners",
    title: Tr::new("Hyzmatdaşlar", "Partners", "Партнёры"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
