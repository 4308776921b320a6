use serde::{Deserialize, Serialize};

/// Content language. Every localized field exists once per language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Tm,
    #[default]
    En,
    Ru,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Tm, Lang::En, Lang::Ru];

    /// Short code, also the suffix of flat localized JSON keys (`title_tm`).
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Tm => "tm",
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// Tag shown next to a localized input.
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::Tm => "TM",
            Lang::En => "EN",
            Lang::Ru => "RU",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Tm => "Türkmençe",
            Lang::En => "English",
            Lang::Ru => "Русский",
        }
    }

    /// Parse a language code, falling back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "tm" | "tk" => Lang::Tm,
            "ru" => Lang::Ru,
            _ => Lang::En,
        }
    }

    /// Flat JSON key for a localized base key, e.g. `("title", Ru)` -> `title_ru`.
    pub fn key(&self, base: &str) -> String {
        format!("{}_{}", base, self.code())
    }
}

/// A static string translated into the three UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tr {
    pub tm: &'static str,
    pub en: &'static str,
    pub ru: &'static str,
}

impl Tr {
    pub const fn new(tm: &'static str, en: &'static str, ru: &'static str) -> Self {
        Self { tm, en, ru }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Tm => self.tm,
            Lang::En => self.en,
            Lang::Ru => self.ru,
        }
    }
}

/// Pick the value for `lang` out of a `(Lang, value)` list, falling back to
/// the first non-empty translation.
pub fn pick_localized<'a>(values: &[(Lang, &'a str)], lang: Lang) -> &'a str {
    values
        .iter()
        .find(|(l, v)| *l == lang && !v.trim().is_empty())
        .or_else(|| values.iter().find(|(_, v)| !v.trim().is_empty()))
        .map(|(_, v)| *v)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_suffix() {
        assert_eq!(Lang::Tm.key("title"), "title_tm");
        assert_eq!(Lang::Ru.key("answer"), "answer_ru");
    }

    #[test]
    fn test_from_code_falls_back_to_english() {
        assert_eq!(Lang::from_code("RU"), Lang::Ru);
        assert_eq!(Lang::from_code("tk"), Lang::Tm);
        assert_eq!(Lang::from_code("de"), Lang::En);
    }

    #[test]
    fn test_pick_localized_fallback() {
        let values = [(Lang::Tm, "Syýahat"), (Lang::En, ""), (Lang::Ru, "Тур")];
        assert_eq!(pick_localized(&values, Lang::Ru), "Тур");
        assert_eq!(pick_localized(&values, Lang::En), "Syýahat");
        assert_eq!(pick_localized(&[], Lang::En), "");
    }
}
