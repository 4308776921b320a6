use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{CAREER, REQUIREMENT};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, lenient_opt_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, HasParent, Resource, ResourceDef, ResourceKind, Tr};

/// Требование к вакансии
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareerRequirement {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub career_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_ru: String,
}

impl Resource for CareerRequirement {
    const KIND: ResourceKind = ResourceKind::CareerRequirements;

    fn id(&self) -> i64 {
        self.id
    }
}

impl HasParent for CareerRequirement {
    fn parent_id(&self) -> Option<i64> {
        self.career_id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("career_id", CAREER, FieldKind::ForeignKey(ResourceKind::Careers))
        .required()
        .listed(),
    FieldSpec::new("title", REQUIREMENT, FieldKind::Text).localized().required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::CareerRequirements,
    path: "career-req",
    title: Tr::new("Talaplar", "Career requirements", "Требования к вакансиям"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
