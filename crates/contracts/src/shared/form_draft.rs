//! Editable form state for any resource.
//!
//! A draft holds every editable JSON key of a resource as the string the user
//! sees in the input. It is filled from a fetched record (edit) or left blank
//! (create), and converted back into a typed record right before submit.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::common::{FieldKind, ResourceDef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(String),

    #[error("field `{key}` must be a number, got `{value}`")]
    InvalidNumber { key: String, value: String },

    #[error("form does not match the record shape: {0}")]
    Shape(String),
}

/// `None` marks a key that was never set and was loaded as `null` or missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    values: BTreeMap<String, Option<String>>,
}

impl FormDraft {
    /// Blank draft with every editable key present.
    pub fn empty(def: &ResourceDef) -> Self {
        let values = def
            .form_fields()
            .flat_map(|f| f.json_keys())
            .map(|key| (key, None))
            .collect();
        Self { values }
    }

    /// Draft pre-filled from an existing record.
    pub fn from_record<T: Serialize>(def: &ResourceDef, record: &T) -> Result<Self, FormError> {
        let json = serde_json::to_value(record).map_err(|e| FormError::Shape(e.to_string()))?;
        let mut draft = Self::empty(def);
        for (key, value) in draft.values.iter_mut() {
            *value = match json.get(key) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
            };
        }
        Ok(draft)
    }

    pub fn get(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(|v| v.as_deref())
            .unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), Some(value.into()));
    }

    fn is_null(&self, key: &str) -> bool {
        !matches!(self.values.get(key), Some(Some(_)))
    }

    /// JSON keys of required fields that are still blank.
    ///
    /// A required image counts as filled when a new file is attached.
    pub fn missing_required(&self, def: &ResourceDef, has_new_file: bool) -> Vec<String> {
        def.form_fields()
            .filter(|f| f.required)
            .filter(|f| !(f.kind == FieldKind::Image && has_new_file))
            .flat_map(|f| f.json_keys())
            .filter(|key| self.get(key).trim().is_empty())
            .collect()
    }

    pub fn validate(&self, def: &ResourceDef, has_new_file: bool) -> Result<(), FormError> {
        match self.missing_required(def, has_new_file).into_iter().next() {
            Some(key) => Err(FormError::MissingField(key)),
            None => Ok(()),
        }
    }

    /// Put a freshly uploaded filename into the image field.
    ///
    /// With no upload the stored path is left exactly as it was loaded.
    pub fn apply_upload(&mut self, def: &ResourceDef, uploaded: Option<String>) {
        if let (Some(field), Some(name)) = (def.image_field(), uploaded) {
            self.set(field.key, name);
        }
    }

    /// Typed JSON object for the API, without the id.
    pub fn to_payload(&self, def: &ResourceDef) -> Result<Map<String, Value>, FormError> {
        let mut payload = Map::new();
        for field in def.form_fields() {
            for key in field.json_keys() {
                let raw = self.get(&key);
                let value = match field.kind {
                    FieldKind::ForeignKey(_) if raw.trim().is_empty() => Value::Null,
                    FieldKind::ForeignKey(_) => raw
                        .trim()
                        .parse::<i64>()
                        .map(Value::from)
                        .map_err(|_| FormError::InvalidNumber {
                            key: key.clone(),
                            value: raw.to_string(),
                        })?,
                    // a path loaded as "" goes back as "", never as null
                    FieldKind::Image | FieldKind::Document if self.is_null(&key) => Value::Null,
                    _ => Value::String(raw.to_string()),
                };
                payload.insert(key, value);
            }
        }
        Ok(payload)
    }

    /// Convert into the typed record, checking the payload shape.
    pub fn to_record<T: DeserializeOwned>(
        &self,
        def: &ResourceDef,
        id: Option<i64>,
    ) -> Result<T, FormError> {
        let mut payload = self.to_payload(def)?;
        if let Some(id) = id {
            payload.insert("id".to_string(), Value::from(id));
        }
        serde_json::from_value(Value::Object(payload)).map_err(|e| FormError::Shape(e.to_string()))
    }
}

/// Text parts of a multipart body: nulls are left out, numbers are rendered.
pub fn multipart_fields(payload: &Map<String, Value>) -> Vec<(String, String)> {
    payload
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key.clone(), s.clone())),
            other => Some((key.clone(), other.to_string())),
        })
        .collect()
}

/// Requests a form submit turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPlan {
    /// `POST` with a JSON body
    CreateJson,
    /// `POST` multipart, the chosen file under the image field
    CreateMultipart,
    /// `PUT` with a JSON body; the stored image path is sent as loaded
    Update,
    /// Upload the new file first, then `PUT` the record with its filename
    UploadThenUpdate,
}

/// Pick the requests for a submit. Updates are always JSON; multipart is
/// only used to create a record that has an image field and a chosen file.
pub fn submit_plan(def: &ResourceDef, id: Option<i64>, has_new_file: bool) -> SubmitPlan {
    let has_image = def.image_field().is_some();
    match id {
        Some(_) if has_image && has_new_file => SubmitPlan::UploadThenUpdate,
        Some(_) => SubmitPlan::Update,
        None if has_image && has_new_file => SubmitPlan::CreateMultipart,
        None => SubmitPlan::CreateJson,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::aggregate::{Tour, DEF as TOUR_DEF};
    use crate::domain::a013_itinerary::aggregate::{ItineraryStep, DEF as ITINERARY_DEF};
    use crate::domain::a016_gallery::aggregate::DEF as GALLERY_DEF;

    fn filled_tour() -> Tour {
        Tour {
            id: 12,
            title_tm: "Gökdere".into(),
            title_en: "Gokdere valley".into(),
            title_ru: "Гёкдере".into(),
            description_en: "<p>Day trip</p>".into(),
            image: Some("uploads/gokdere.jpg".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_draft_has_all_keys() {
        let draft = FormDraft::empty(&TOUR_DEF);
        assert_eq!(draft.values.len(), 7);
        assert_eq!(draft.get("title_ru"), "");
    }

    #[test]
    fn test_missing_required_blocks_submit() {
        let mut draft = FormDraft::empty(&TOUR_DEF);
        draft.set("title_tm", "Ahal");
        draft.set("title_en", "Ahal");
        assert_eq!(
            draft.validate(&TOUR_DEF, false),
            Err(FormError::MissingField("title_ru".into()))
        );
        draft.set("title_ru", "Ахал");
        assert_eq!(draft.validate(&TOUR_DEF, false), Ok(()));
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required() {
        let mut draft = FormDraft::from_record(&TOUR_DEF, &filled_tour()).unwrap();
        draft.set("title_en", "   ");
        assert_eq!(draft.missing_required(&TOUR_DEF, false), vec!["title_en"]);
    }

    #[test]
    fn test_required_image_satisfied_by_new_file() {
        let draft = FormDraft::empty(&GALLERY_DEF);
        assert_eq!(draft.missing_required(&GALLERY_DEF, false), vec!["image"]);
        assert!(draft.missing_required(&GALLERY_DEF, true).is_empty());
    }

    #[test]
    fn test_edit_without_new_file_keeps_image_path() {
        let tour = filled_tour();
        let mut draft = FormDraft::from_record(&TOUR_DEF, &tour).unwrap();
        draft.set("title_en", "Gokdere gorge");
        draft.apply_upload(&TOUR_DEF, None);

        let updated: Tour = draft.to_record(&TOUR_DEF, Some(tour.id)).unwrap();
        assert_eq!(updated.image.as_deref(), Some("uploads/gokdere.jpg"));
        assert_eq!(updated.title_en, "Gokdere gorge");
        assert_eq!(updated.id, 12);
    }

    #[test]
    fn test_edit_keeps_empty_image_path() {
        let tour = Tour {
            image: Some(String::new()),
            ..filled_tour()
        };
        let draft = FormDraft::from_record(&TOUR_DEF, &tour).unwrap();
        let payload = draft.to_payload(&TOUR_DEF).unwrap();
        assert_eq!(payload["image"], serde_json::json!(""));

        let updated: Tour = draft.to_record(&TOUR_DEF, Some(tour.id)).unwrap();
        assert_eq!(updated.image, Some(String::new()));
    }

    #[test]
    fn test_edit_keeps_null_image() {
        let tour = Tour {
            image: None,
            ..filled_tour()
        };
        let draft = FormDraft::from_record(&TOUR_DEF, &tour).unwrap();
        assert_eq!(draft.get("image"), "");
        assert_eq!(draft.to_payload(&TOUR_DEF).unwrap()["image"], Value::Null);
    }

    #[test]
    fn test_edit_with_upload_replaces_image() {
        let mut draft = FormDraft::from_record(&TOUR_DEF, &filled_tour()).unwrap();
        draft.apply_upload(&TOUR_DEF, Some("uploads/new.jpg".into()));
        let updated: Tour = draft.to_record(&TOUR_DEF, Some(12)).unwrap();
        assert_eq!(updated.image.as_deref(), Some("uploads/new.jpg"));
    }

    #[test]
    fn test_round_trip_preserves_html_verbatim() {
        let tour = filled_tour();
        let draft = FormDraft::from_record(&TOUR_DEF, &tour).unwrap();
        let back: Tour = draft.to_record(&TOUR_DEF, Some(tour.id)).unwrap();
        assert_eq!(back, tour);
    }

    #[test]
    fn test_foreign_key_is_numeric_in_payload() {
        let mut draft = FormDraft::empty(&ITINERARY_DEF);
        draft.set("tour_id", "4");
        draft.set("title_en", "Day 1");
        let payload = draft.to_payload(&ITINERARY_DEF).unwrap();
        assert_eq!(payload["tour_id"], serde_json::json!(4));
        assert!(payload.get("id").is_none());

        let step: ItineraryStep = draft.to_record(&ITINERARY_DEF, None).unwrap();
        assert_eq!(step.tour_id, Some(4));
        assert_eq!(step.id, 0);
    }

    #[test]
    fn test_foreign_key_rejects_text() {
        let mut draft = FormDraft::empty(&ITINERARY_DEF);
        draft.set("tour_id", "four");
        assert_eq!(
            draft.to_payload(&ITINERARY_DEF),
            Err(FormError::InvalidNumber {
                key: "tour_id".into(),
                value: "four".into()
            })
        );
    }

    #[test]
    fn test_submit_plan() {
        assert_eq!(submit_plan(&TOUR_DEF, None, false), SubmitPlan::CreateJson);
        assert_eq!(submit_plan(&TOUR_DEF, None, true), SubmitPlan::CreateMultipart);
        assert_eq!(submit_plan(&TOUR_DEF, Some(3), false), SubmitPlan::Update);
        assert_eq!(submit_plan(&TOUR_DEF, Some(3), true), SubmitPlan::UploadThenUpdate);
        // no image field: a stray file never changes the request
        assert_eq!(submit_plan(&ITINERARY_DEF, None, true), SubmitPlan::CreateJson);
        assert_eq!(submit_plan(&ITINERARY_DEF, Some(1), true), SubmitPlan::Update);
    }

    #[test]
    fn test_multipart_fields_skip_nulls() {
        let mut draft = FormDraft::empty(&ITINERARY_DEF);
        draft.set("tour_id", "2");
        draft.set("title_tm", "1-nji gün");
        let fields = multipart_fields(&draft.to_payload(&ITINERARY_DEF).unwrap());
        assert!(fields.contains(&("tour_id".to_string(), "2".to_string())));
        assert!(fields.contains(&("title_tm".to_string(), "1-nji gün".to_string())));
        assert!(fields.contains(&("title_en".to_string(), String::new())));

        let mut blank_fk = FormDraft::empty(&ITINERARY_DEF);
        blank_fk.set("title_en", "x");
        let fields = multipart_fields(&blank_fk.to_payload(&ITINERARY_DEF).unwrap());
        assert!(fields.iter().all(|(k, _)| k != "tour_id"));
    }
}
