use std::collections::HashMap;

use crate::domain::models::translation::{Language, Translation};

/// All content bundles, embedded at compile time and parsed once at startup.
pub struct TranslationCatalog {
    bundles: HashMap<Language, Translation>,
}

impl TranslationCatalog {
    pub fn load() -> Result<Self, serde_json::Error> {
        let mut bundles = HashMap::new();
        bundles.insert(Language::En, serde_json::from_str(include_str!("../content/en.json"))?);
        bundles.insert(Language::Ko, serde_json::from_str(include_str!("../content/ko.json"))?);
        bundles.insert(Language::El, serde_json::from_str(include_str!("../content/el.json"))?);
        Ok(Self { bundles })
    }

    pub fn get(&self, language: Language) -> Option<&Translation> {
        self.bundles.get(&language)
    }

    pub fn languages(&self) -> Vec<&'static str> {
        Language::ALL
            .into_iter()
            .filter(|language| self.bundles.contains_key(language))
            .map(|language| language.code())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundles_parse() {
        let catalog = TranslationCatalog::load().expect("Bundles must parse");
        for language in Language::ALL {
            let bundle = catalog.get(language).expect("Bundle missing");
            assert!(!bundle.language.is_empty());
            assert!(!bundle.rsvp.form.error_message.is_empty());
            assert!(!bundle.rsvp.form.success_message.is_empty());
        }
    }

    #[test]
    fn test_languages_lists_all_codes() {
        let catalog = TranslationCatalog::load().unwrap();
        assert_eq!(catalog.languages(), vec!["en", "ko", "el"]);
    }
}
