use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{ADDRESS, MAP};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

/// Адрес офиса с картой
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactAddress {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_ru: String,
    #[serde(default)]
    pub map: Option<String>,
}

impl Resource for ContactAddress {
    const KIND: ResourceKind = ResourceKind::ContactAddresses;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", ADDRESS, FieldKind::Text).localized().required().listed(),
    FieldSpec::new("map", MAP, FieldKind::Iframe),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::ContactAddresses,
    path: "contact-address",
    title: Tr::new("Salgylar", "Addresses", "Адреса"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
