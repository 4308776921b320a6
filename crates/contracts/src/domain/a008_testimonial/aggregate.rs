use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{AUTHOR, IMAGE, REVIEW};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

/// Отзыв клиента
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
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

impl Resource for Testimonial {
    const KIND: ResourceKind = ResourceKind::Testimonials;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", AUTHOR, FieldKind::Text).localized().required().listed(),
    FieldSpec::new("description", REVIEW, FieldKind::Html).localized(),
    FieldSpec::new("image", IMAGE, FieldKind::Image).listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Testimonials,
    path: "testimonials",
    title: Tr::new("Teswirler", "Testimonials", "Отзывы"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
