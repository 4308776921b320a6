use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{ANSWER, QUESTION};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

/// Вопрос и ответ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub question_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_ru: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer_ru: String,
}

impl Resource for FaqEntry {
    const KIND: ResourceKind = ResourceKind::Faq;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("question", QUESTION, FieldKind::Text).localized().required().listed(),
    FieldSpec::new("answer", ANSWER, FieldKind::Html).localized().required(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Faq,
    path: "faq",
    title: Tr::new("Ýygy soraglar", "FAQ", "Вопросы и ответы"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
