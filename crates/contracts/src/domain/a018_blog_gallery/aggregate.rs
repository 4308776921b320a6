use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{BLOG, IMAGE};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, lenient_opt_id};
use crate::domain::common::{FieldKind, FieldSpec, HasParent, Resource, ResourceDef, ResourceKind, Tr};

/// Фото к записи блога
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogGalleryImage {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub blog_id: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Resource for BlogGalleryImage {
    const KIND: ResourceKind = ResourceKind::BlogGallery;

    fn id(&self) -> i64 {
        self.id
    }
}

impl HasParent for BlogGalleryImage {
    fn parent_id(&self) -> Option<i64> {
        self.blog_id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("blog_id", BLOG, FieldKind::ForeignKey(ResourceKind::Blogs)).required().listed(),
    FieldSpec::new("image", IMAGE, FieldKind::Image).required().listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::BlogGallery,
    path: "blog-gallery",
    title: Tr::new("Blog suratlary", "Blog gallery", "Галерея блогов"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};
