/// Display formatting for record values
///
/// Provides consistent rendering of table cells across every resource list
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::domain::common::lang::pick_localized;
use crate::domain::common::{FieldKind, FieldSpec, Lang};

const CELL_MAX_CHARS: usize = 80;

/// Format an API timestamp as `DD.MM.YYYY HH:MM`
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d.%m.%Y %H:%M").to_string();
        }
    }
    raw.to_string()
}

/// Drop tags and the common entities from editor HTML.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten to `max` characters with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut.trim_end())
    }
}

/// Raw string value of `key` in a record object.
pub fn raw_value(record: &Value, key: &str) -> String {
    match record.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Localized value of a field in `lang`, falling back to any translation.
pub fn localized_value(field: &FieldSpec, record: &Value, lang: Lang) -> String {
    let values: Vec<(Lang, String)> = field
        .localized_keys()
        .into_iter()
        .map(|(l, key)| (l, raw_value(record, &key)))
        .collect();
    let refs: Vec<(Lang, &str)> = values.iter().map(|(l, v)| (*l, v.as_str())).collect();
    pick_localized(&refs, lang).to_string()
}

/// Plain-text table cell for one field of a record.
pub fn cell_text(field: &FieldSpec, record: &Value, lang: Lang) -> String {
    let text = if field.localized {
        localized_value(field, record, lang)
    } else {
        raw_value(record, field.key)
    };

    match field.kind {
        FieldKind::Html | FieldKind::Iframe => truncate(&strip_html(&text), CELL_MAX_CHARS),
        FieldKind::Timestamp if !text.is_empty() => format_timestamp(&text),
        FieldKind::ForeignKey(_) if !text.is_empty() => format!("#{}", text),
        _ => truncate(&text, CELL_MAX_CHARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::labels::{DESCRIPTION, TITLE, TOUR};
    use crate::domain::common::ResourceKind;
    use serde_json::json;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_timestamp("2024-12-31 23:59:59"), "31.12.2024 23:59");
        assert_eq!(format_timestamp("2024-12-31T23:59:59"), "31.12.2024 23:59");
    }

    #[test]
    fn test_invalid_timestamp_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello&nbsp;<b>Ashgabat</b></p><p>&amp; Mary</p>"),
            "Hello Ashgabat & Mary"
        );
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Türkmenistan", 4), "Türk…");
        assert_eq!(truncate("Mary", 4), "Mary");
    }

    #[test]
    fn test_cell_text_by_kind() {
        let record = json!({
            "title_tm": "Ýol", "title_en": "", "title_ru": "Путь",
            "description_en": "<p>Long <i>walk</i></p>",
            "tour_id": 4
        });
        let title = FieldSpec::new("title", TITLE, FieldKind::Text).localized();
        let desc = FieldSpec::new("description", DESCRIPTION, FieldKind::Html).localized();
        let tour = FieldSpec::new("tour_id", TOUR, FieldKind::ForeignKey(ResourceKind::Tours));

        assert_eq!(cell_text(&title, &record, Lang::Ru), "Путь");
        assert_eq!(cell_text(&title, &record, Lang::En), "Ýol");
        assert_eq!(cell_text(&desc, &record, Lang::Tm), "Long walk");
        assert_eq!(cell_text(&tour, &record, Lang::En), "#4");
    }
}
