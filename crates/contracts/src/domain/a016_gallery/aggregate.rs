use serde::{Deserialize, Serialize};

use crate::domain::common::labels::IMAGE;
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::lenient_id;
use crate::domain::common::{FieldKind, FieldSpec, Resource, ResourceDef, ResourceKind, Tr};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default)]
    pub image: Option<String>,
}

impl Resource for GalleryImage {
    const KIND: ResourceKind = ResourceKind::Gallery;

    fn id(&self) -> i64 {
        self.id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("image", IMAGE, FieldKind::Image).required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Gallery,
    path: "gallery",
    title: Tr::new("Galereýa", "Gallery", "Галерея"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
