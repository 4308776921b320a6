use super::api_error::ApiError;

/// Shared upload endpoint; the returned filename becomes the image reference
/// of whichever resource is being edited.
pub const UPLOAD_PATH: &str = "/api/sliders/upload";

/// Multipart field name the upload endpoint reads the file from.
pub const UPLOAD_FIELD: &str = "file";

const FILENAME_KEYS: [&str; 5] = ["filename", "fileName", "file", "path", "url"];

/// Extract the stored filename from an upload response.
///
/// Accepts a bare string, a JSON string, or a JSON object carrying the name
/// under one of the usual keys.
pub fn parse_upload_response(body: &str) -> Result<String, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ApiError::Empty);
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(name)) => non_empty(name),
        Ok(serde_json::Value::Object(map)) => FILENAME_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(|name| non_empty(name.to_string()))
            .unwrap_or_else(|| Err(ApiError::Decode(format!("no filename in {}", body)))),
        Ok(other) => Err(ApiError::Decode(format!("unexpected upload response {}", other))),
        // Not JSON: the endpoint answered with the plain filename
        Err(_) => non_empty(body.to_string()),
    }
}

fn non_empty(name: String) -> Result<String, ApiError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        Err(ApiError::Empty)
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_filename() {
        assert_eq!(
            parse_upload_response("uploads/1699.jpg\n").unwrap(),
            "uploads/1699.jpg"
        );
    }

    #[test]
    fn test_json_string() {
        assert_eq!(parse_upload_response(r#""a.png""#).unwrap(), "a.png");
    }

    #[test]
    fn test_json_object_keys() {
        assert_eq!(
            parse_upload_response(r#"{"filename": "b.webp"}"#).unwrap(),
            "b.webp"
        );
        assert_eq!(
            parse_upload_response(r#"{"fileName": "c.jpg", "size": 10}"#).unwrap(),
            "c.jpg"
        );
        assert_eq!(
            parse_upload_response(r#"{"path": "/static/d.jpg"}"#).unwrap(),
            "/static/d.jpg"
        );
    }

    #[test]
    fn test_unusable_responses() {
        assert_eq!(parse_upload_response("   "), Err(ApiError::Empty));
        assert_eq!(parse_upload_response(r#""""#), Err(ApiError::Empty));
        assert!(matches!(
            parse_upload_response(r#"{"ok": true}"#),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            parse_upload_response("42"),
            Err(ApiError::Decode(_))
        ));
    }
}
