use serde::{de::DeserializeOwned, Serialize};

use super::{FieldKind, FieldSpec, ResourceKind, Tr};

/// Static metadata of a managed resource: where it lives and what it holds.
#[derive(Debug)]
pub struct ResourceDef {
    pub kind: ResourceKind,
    /// Collection path under `/api/`, e.g. `"contact-mails"`
    pub path: &'static str,
    /// List name for the UI (plural)
    pub title: Tr,
    pub fields: &'static [FieldSpec],
    pub creatable: bool,
    pub editable: bool,
}

impl ResourceDef {
    /// Fields shown as list columns, in declaration order.
    pub fn list_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.listed)
    }

    /// Fields present on create/edit forms.
    pub fn form_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.kind.is_editable())
    }

    /// The image field, if the resource carries one.
    pub fn image_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.kind == FieldKind::Image)
    }

    /// Foreign key field and the kind it points at.
    pub fn parent_field(&self) -> Option<(&FieldSpec, ResourceKind)> {
        self.fields.iter().find_map(|f| match f.kind {
            FieldKind::ForeignKey(parent) => Some((f, parent)),
            _ => None,
        })
    }

    /// First localized field, used as the record caption in headers and pickers.
    pub fn caption_field(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.localized)
    }
}

/// Трейт для записи управляемого ресурса
///
/// A record is a flat JSON object; the identifier is assigned by the backend
/// and never generated on the client.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    const KIND: ResourceKind;

    /// Backend-assigned identifier, `0` before the record is created.
    fn id(&self) -> i64;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    fn def() -> &'static ResourceDef {
        Self::KIND.def()
    }

    fn path() -> &'static str {
        Self::KIND.path()
    }
}

/// Records that belong to a parent record through a single foreign key.
pub trait HasParent {
    fn parent_id(&self) -> Option<i64>;
}

/// `skip_serializing_if` predicate: unassigned ids stay out of payloads.
pub fn is_unassigned(id: &i64) -> bool {
    *id == 0
}
