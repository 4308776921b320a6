use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{ITEM, TOUR};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, lenient_opt_id, null_as_default};
use crate::domain::common::{FieldKind, FieldSpec, HasParent, Resource, ResourceDef, ResourceKind, Tr};

/// Что не входит в стоимость тура
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourExclude {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub tour_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_ru: String,
}

impl Resource for TourExclude {
    const KIND: ResourceKind = ResourceKind::Excludes;

    fn id(&self) -> i64 {
        self.id
    }
}

impl HasParent for TourExclude {
    fn parent_id(&self) -> Option<i64> {
        self.tour_id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("tour_id", TOUR, FieldKind::ForeignKey(ResourceKind::Tours)).required().listed(),
    FieldSpec::new("title", ITEM, FieldKind::Text).localized().required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Excludes,
    path: "excludes",
    title: Tr::new("Bahasyna girmeýär", "Not included", "Не включено"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
