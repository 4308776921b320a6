//! Normalization of API response bodies.
//!
//! Some "get by id" endpoints answer with the record itself, others with a
//! one-element array. Screens always receive a single typed record.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::api_error::ApiError;
use crate::domain::common::Resource;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }

    /// First record; an empty array is an error, not a missing-record state.
    pub fn into_single(self) -> Result<T, ApiError> {
        match self {
            OneOrMany::One(item) => Ok(item),
            OneOrMany::Many(items) => items.into_iter().next().ok_or(ApiError::Empty),
        }
    }
}

fn is_blank(body: &str) -> bool {
    let body = body.trim();
    body.is_empty() || body == "null"
}

/// Decode a list body. A blank body is an empty list.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    if is_blank(body) {
        return Ok(Vec::new());
    }
    let parsed: OneOrMany<T> = serde_json::from_str(body)?;
    Ok(parsed.into_vec())
}

/// Decode a single-record body.
pub fn decode_single<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if is_blank(body) {
        return Err(ApiError::Empty);
    }
    let parsed: OneOrMany<T> = serde_json::from_str(body)?;
    parsed.into_single()
}

/// Reject a record without a backend id. Every record field has a default,
/// so an error object like `{"message": ".."}` also decodes as a record.
pub fn require_id<T: Resource>(record: T) -> Result<T, ApiError> {
    if record.id() > 0 {
        Ok(record)
    } else {
        Err(ApiError::Decode(format!("{} record without an id", T::path())))
    }
}

pub fn require_ids<T: Resource>(records: Vec<T>) -> Result<Vec<T>, ApiError> {
    records.into_iter().map(require_id).collect()
}

/// Decode a list of resource records; a record without an id fails the list.
pub fn decode_records<T: Resource>(body: &str) -> Result<Vec<T>, ApiError> {
    decode_list(body).and_then(require_ids)
}

/// Decode one resource record; a body without an id is a load error.
pub fn decode_record<T: Resource>(body: &str) -> Result<T, ApiError> {
    decode_single(body).and_then(require_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::aggregate::Tour;

    #[test]
    fn test_single_from_object() {
        let tour: Tour = decode_single(r#"{"id": 3, "title_en": "Darvaza"}"#).unwrap();
        assert_eq!(tour.id, 3);
    }

    #[test]
    fn test_single_from_one_element_array() {
        let tour: Tour = decode_single(r#"[{"id": 5, "title_en": "Merv"}]"#).unwrap();
        assert_eq!(tour.id, 5);
        assert_eq!(tour.title_en, "Merv");
    }

    #[test]
    fn test_single_from_empty_is_error() {
        assert_eq!(decode_single::<Tour>("[]"), Err(ApiError::Empty));
        assert_eq!(decode_single::<Tour>(""), Err(ApiError::Empty));
        assert_eq!(decode_single::<Tour>("null"), Err(ApiError::Empty));
    }

    #[test]
    fn test_single_malformed() {
        assert!(matches!(
            decode_single::<Tour>("<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_list_shapes() {
        assert!(decode_list::<Tour>("[]").unwrap().is_empty());
        assert!(decode_list::<Tour>("  ").unwrap().is_empty());
        assert_eq!(decode_records::<Tour>(r#"{"id": 1}"#).unwrap().len(), 1);
        assert_eq!(
            decode_records::<Tour>(r#"[{"id": 1}, {"id": 2}]"#).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_error_object_is_not_a_record() {
        assert!(matches!(
            decode_records::<Tour>(r#"{"message": "Server error"}"#),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_record::<Tour>(r#"{"message": "Not found"}"#),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_record::<Tour>(r#"[{"title_en": "Merv"}]"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_one_record_without_id_fails_the_list() {
        assert!(decode_records::<Tour>(r#"[{"id": 1}, {"title_en": "x"}]"#).is_err());
        assert!(decode_records::<Tour>("[]").unwrap().is_empty());
    }
}
