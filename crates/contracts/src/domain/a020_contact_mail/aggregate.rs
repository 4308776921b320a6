use serde::{Deserialize, Serialize};

use crate::domain::common::labels::EMAIL;
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMail {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mail: String,
}

impl Resource for ContactMail {
    const KIND: ResourceKind = ResourceKind::ContactMails;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("mail", EMAIL, FieldKind::Email).required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::ContactMails,
    path: "contact-mails",
    title: Tr::new("E-poçtalar", "Contact emails", "Почтовые адреса"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
