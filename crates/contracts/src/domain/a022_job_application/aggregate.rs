use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{CAREER, CREATED_AT, CV, EMAIL, NAME, PHONE};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, lenient_opt_id, null_as_default};
use crate::domain::common::{
    FieldKind, FieldSpec, HasParent, Resource, ResourceDef, ResourceKind, Tr,
};

/// Отклик соискателя на вакансию
///
/// Submitted from the public site; the console only lists, views and deletes
/// applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "is_unassigned")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_opt_id")]
    pub career_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for JobApplication {
    const KIND: ResourceKind = ResourceKind::JobApplications;

    fn id(&self) -> i64 {
        self.id
    }
}

impl HasParent for JobApplication {
    fn parent_id(&self) -> Option<i64> {
        self.career_id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("career_id", CAREER, FieldKind::ForeignKey(ResourceKind::Careers)).listed(),
    FieldSpec::new("name", NAME, FieldKind::Text).required().listed(),
    FieldSpec::new("email", EMAIL, FieldKind::Email).listed(),
    FieldSpec::new("phone", PHONE, FieldKind::Text).listed(),
    FieldSpec::new("cv", CV, FieldKind::Document),
    FieldSpec::new("created_at", CREATED_AT, FieldKind::Timestamp).listed(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::JobApplications,
    path: "apply-job",
    title: Tr::new("Iş arzalary", "Job applications", "Отклики на вакансии"),
    fields: FIELDS,
    creatable: false,
    editable: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_resource() {
        assert!(!DEF.creatable);
        assert!(!DEF.editable);
        assert!(DEF.image_field().is_none());
        assert!(DEF.form_fields().all(|f| f.key != "created_at"));
    }
}
