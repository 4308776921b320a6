use serde::{Deserialize, Serialize};

use crate::domain::common::labels::PHONE;
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactNumber {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: String,
}

impl Resource for ContactNumber {
    const KIND: ResourceKind = ResourceKind::ContactNumbers;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("number", PHONE, FieldKind::Text).required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::ContactNumbers,
    path: "contact-numbers",
    title: Tr::new("Telefon belgileri", "Phone numbers", "Телефоны"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
