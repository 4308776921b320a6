use serde::{Deserialize, Serialize};

use crate::domain::common::labels::{DESCRIPTION, TITLE, TOUR};
use crate::domain::common::resource::is_unassigned;
use crate::domain::common::serde_helpers::{lenient_id, lenient_opt_id, null_as_default};
use crate::domain::common::{
    FieldKind, FieldSpec, HasParent, Resource, ResourceDef, ResourceKind, Tr,
};

/// Один день (шаг) маршрута тура
///
/// The API returns steps of all tours as one flat list; the console groups
/// them by `tour_id` for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryStep {
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

    #[serde(default, deserialize_with = "null_as_default")]
    pub description_tm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_en: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_ru: String,
}

impl Resource for ItineraryStep {
    const KIND: ResourceKind = ResourceKind::Itinerary;

    fn id(&self) -> i64 {
        self.id
    }
}

impl HasParent for ItineraryStep {
    fn parent_id(&self) -> Option<i64> {
        self.tour_id
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("tour_id", TOUR, FieldKind::ForeignKey(ResourceKind::Tours))
        .required()
        .listed(),
    FieldSpec::new("title", TITLE, FieldKind::Text)
        .localized()
        .required()
        .listed(),
    FieldSpec::new("description", DESCRIPTION, FieldKind::Html).localized(),
];

pub static DEF: ResourceDef = ResourceDef {
    kind: ResourceKind::Itinerary,
    path: "itinerary",
    title: Tr::new("Marşrut", "Itinerary", "Маршрут"),
    fields: FIELDS,
    creatable: true,
    editable: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_rows() {
        let rows: Vec<ItineraryStep> = serde_json::from_str(
            r#"[
                {"id": 1, "tour_id": 4, "title_en": "Day 1", "title_tm": null},
                {"id": 2, "tour_id": "4", "title_en": "Day 2"}
            ]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].parent_id(), Some(4));
        assert_eq!(rows[1].parent_id(), Some(4));
        assert_eq!(rows[0].title_tm, "");
    }
}
