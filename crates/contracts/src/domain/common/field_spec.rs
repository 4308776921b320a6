use super::{Lang, ResourceKind, Tr};

/// How a field is stored and edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line plain text
    Text,
    /// HTML produced by the rich-text editor
    Html,
    /// Path of an uploaded image
    Image,
    /// Embedded markup, e.g. a map iframe
    Iframe,
    /// Path of an uploaded non-image file (CV), shown as a link
    Document,
    Email,
    /// Numeric id of a parent record
    ForeignKey(ResourceKind),
    /// Server-assigned timestamp, read only
    Timestamp,
}

impl FieldKind {
    /// Whether the value is sent back in create/update payloads.
    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldKind::Timestamp)
    }
}

/// Static description of one field of a resource.
///
/// A localized field covers three flat JSON keys (`<key>_tm`, `<key>_en`,
/// `<key>_ru`); every other field maps to exactly `key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: Tr,
    pub kind: FieldKind,
    pub localized: bool,
    pub required: bool,
    /// Shown as a column on the list screen
    pub listed: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: Tr, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            localized: false,
            required: false,
            listed: false,
        }
    }

    pub const fn localized(self) -> Self {
        Self {
            localized: true,
            ..self
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn listed(self) -> Self {
        Self {
            listed: true,
            ..self
        }
    }

    /// All JSON keys backing this field, in `Lang::ALL` order for localized ones.
    pub fn json_keys(&self) -> Vec<String> {
        if self.localized {
            Lang::ALL.iter().map(|lang| lang.key(self.key)).collect()
        } else {
            vec![self.key.to_string()]
        }
    }

    /// `(lang, json key)` pairs of a localized field; empty for plain fields.
    pub fn localized_keys(&self) -> Vec<(Lang, String)> {
        if self.localized {
            Lang::ALL.iter().map(|lang| (*lang, lang.key(self.key))).collect()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: Tr = Tr::new("Ady", "Title", "Название");

    #[test]
    fn test_localized_field_expands_to_three_keys() {
        let spec = FieldSpec::new("title", TITLE, FieldKind::Text).localized();
        assert_eq!(spec.json_keys(), vec!["title_tm", "title_en", "title_ru"]);
    }

    #[test]
    fn test_plain_field_single_key() {
        let spec = FieldSpec::new("mail", TITLE, FieldKind::Email).required();
        assert_eq!(spec.json_keys(), vec!["mail"]);
        assert!(spec.required);
        assert!(spec.localized_keys().is_empty());
    }

    #[test]
    fn test_timestamp_not_editable() {
        assert!(!FieldKind::Timestamp.is_editable());
        assert!(FieldKind::Image.is_editable());
    }
}
