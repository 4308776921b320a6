use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{IMAGE, TOUR};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, lenient_opt_id};
use crate::domain::common::{FieldKind, FieldSpec, HasParent, Resource, ResourceDef, ResourceKind, Tr};

/// Фото тура
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourGalleryImage {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub tour_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Resource for TourGalleryImage {
    const KIND: ResourceKind = ResourceKind::TourGallery;

    fn id(&self) -> i64 {
        self.id
    }
}

impl HasParent for TourGalleryImage {
    fn parent_id(&self) -> Option<i64> {
        self.tour_id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("tour_id", TOUR, FieldKind::ForeignKey(ResourceKind::Tours)).required().listed(),
    FieldSpec::new("image", IMAGE, FieldKind::Image).required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::TourGallery,
    path: "tour-gallery",
    title: Tr::new("Tur suratlary", "Tour gallery", "Галерея туров"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
