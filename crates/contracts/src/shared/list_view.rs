//! Row models for list screens.

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::common::{Lang, Resource, ResourceDef, Tr};
use crate::shared::format::localized_value;
use crate::shared::i18n;

/// A table row: a record, or the single "no data" placeholder of an empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRow<T> {
    Item(T),
    Placeholder,
}

pub fn rows_or_placeholder<T>(rows: Vec<T>) -> Vec<ListRow<T>> {
    if rows.is_empty() {
        vec![ListRow::Placeholder]
    } else {
        rows.into_iter().map(ListRow::Item).collect()
    }
}

/// Drop a deleted record from the in-memory list. Returns whether it was there.
pub fn remove_by_id<T: Resource>(rows: &mut Vec<T>, id: i64) -> bool {
    let before = rows.len();
    rows.retain(|row| row.id() != id);
    rows.len() != before
}

/// `(id, caption)` of parent records in API order, for pickers.
///
/// Records without a usable id are skipped; a parent kind without a caption
/// field is captioned by the id.
pub fn parent_options(parent: &ResourceDef, records: &[Value], lang: Lang) -> Vec<(i64, String)> {
    records
        .iter()
        .filter_map(|record| {
            let id = match record.get("id") {
                Some(Value::Number(n)) => n.as_i64()?,
                Some(Value::String(s)) => s.trim().parse().ok()?,
                _ => return None,
            };
            let caption = match parent.caption_field() {
                Some(field) => localized_value(field, record, lang),
                None => format!("#{}", id),
            };
            Some((id, caption))
        })
        .collect()
}

/// `id -> caption` lookup of parent records, for group headers.
pub fn parent_titles(parent: &ResourceDef, records: &[Value], lang: Lang) -> HashMap<i64, String> {
    parent_options(parent, records, lang).into_iter().collect()
}

/// Header text of a group: the parent's caption, or `<Label> #<id>` when the
/// parent is unknown.
pub fn group_caption(
    key: Option<i64>,
    titles: &HashMap<i64, String>,
    parent_label: Tr,
    lang: Lang,
) -> String {
    match key {
        Some(id) => match titles.get(&id).filter(|t| !t.trim().is_empty()) {
            Some(title) => title.clone(),
            None => format!("{} #{}", parent_label.get(lang), id),
        },
        None => i18n::UNGROUPED.get(lang).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::aggregate::DEF as TOURS;
    use crate::domain::a020_contact_mail::aggregate::ContactMail;
    use crate::domain::common::labels::TOUR;
    use serde_json::json;

    #[test]
    fn test_empty_list_yields_placeholder() {
        let rows: Vec<ListRow<i32>> = rows_or_placeholder(Vec::new());
        assert_eq!(rows, vec![ListRow::Placeholder]);

        let rows = rows_or_placeholder(vec![1, 2]);
        assert_eq!(rows, vec![ListRow::Item(1), ListRow::Item(2)]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = vec![
            ContactMail {
                id: 1,
                mail: "a@b.tm".into(),
            },
            ContactMail {
                id: 2,
                mail: "c@d.tm".into(),
            },
        ];
        assert!(remove_by_id(&mut rows, 1));
        assert!(!remove_by_id(&mut rows, 1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_parent_titles_and_captions() {
        let tours = vec![
            json!({"id": 1, "title_en": "Ashgabat", "title_ru": "Ашхабад"}),
            json!({"id": "2", "title_tm": "Mary"}),
            json!({"title_en": "no id"}),
        ];
        let titles = parent_titles(&TOURS, &tours, Lang::Ru);
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[&1], "Ашхабад");
        // falls back to the first non-empty translation
        assert_eq!(titles[&2], "Mary");

        assert_eq!(group_caption(Some(1), &titles, TOUR, Lang::Ru), "Ашхабад");
        assert_eq!(group_caption(Some(9), &titles, TOUR, Lang::En), "Tour #9");
        assert_eq!(group_caption(None, &titles, TOUR, Lang::En), "Without tour");
    }

    #[test]
    fn test_parent_options_keep_api_order() {
        let tours = vec![
            json!({"id": 5, "title_en": "Merv"}),
            json!({"id": 3, "title_en": "Darvaza"}),
        ];
        let options = parent_options(&TOURS, &tours, Lang::En);
        assert_eq!(
            options,
            vec![(5, "Merv".to_string()), (3, "Darvaza".to_string())]
        );
    }
}
