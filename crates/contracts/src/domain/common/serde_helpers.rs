use serde::{Deserialize, Deserializer};

/// Read JSON `null` as the type's default (the API sends `null` for blank
/// localized text).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read an id that may arrive as a number or a numeric string.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_id(deserializer)?.unwrap_or_default())
}

/// Optional variant of [`lenient_id`]; `null` and `""` read as `None`.
pub fn lenient_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Str(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Num(n)) => Ok(Some(n)),
        Some(RawId::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(RawId::Str(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_id")]
        id: i64,
        #[serde(default, deserialize_with = "lenient_opt_id")]
        tour_id: Option<i64>,
        #[serde(default, deserialize_with = "null_as_default")]
        title_en: String,
    }

    #[test]
    fn test_string_ids_and_null_text() {
        let row: Row =
            serde_json::from_str(r#"{"id":"7","tour_id":"3","title_en":null}"#).unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.tour_id, Some(3));
        assert_eq!(row.title_en, "");
    }

    #[test]
    fn test_missing_and_blank_ids() {
        let row: Row = serde_json::from_str(r#"{"tour_id":""}"#).unwrap();
        assert_eq!(row.id, 0);
        assert_eq!(row.tour_id, None);
    }

    #[test]
    fn test_garbage_id_rejected() {
        assert!(serde_json::from_str::<Row>(r#"{"id":"abc"}"#).is_err());
    }
}
