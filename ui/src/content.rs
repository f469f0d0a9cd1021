//! The content store: every piece of copy on the site, keyed by language.
//!
//! The store is a single JSON document bundled alongside the app and fetched
//! once at startup. Each language carries a structurally identical
//! [`PageContent`] record, so a missing field is a load-time parse error
//! rather than a blank spot in the rendered page. After the one fetch the
//! store is immutable; switching languages only changes which record the
//! views read.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Language the site starts in. `load` guarantees this record exists.
pub const DEFAULT_LANGUAGE: LanguageCode = LanguageCode::En;

/// Bundled content dictionary, fetched at runtime.
const CONTENT_JSON: Asset = asset!("/assets/content.json");

/// Short language identifier selecting one record in the store.
///
/// Adding a language means adding a variant here and a record to
/// `assets/content.json`; the schema test keeps the two in step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Nl,
}

impl LanguageCode {
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Nl => "nl",
        }
    }

    /// Uppercase form for the language selector.
    pub fn label(self) -> &'static str {
        match self {
            LanguageCode::En => "EN",
            LanguageCode::Nl => "NL",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown language code")]
pub struct UnknownLanguage;

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageCode::En),
            "nl" => Ok(LanguageCode::Nl),
            _ => Err(UnknownLanguage),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("content payload is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("content is missing the \"{0}\" record")]
    MissingLanguage(LanguageCode),
}

/// All page copy for every language, read-only after load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ContentStore {
    pages: BTreeMap<LanguageCode, PageContent>,
}

impl ContentStore {
    /// The content record for `lang`, falling back to the default language.
    pub fn page(&self, lang: LanguageCode) -> &PageContent {
        self.pages
            .get(&lang)
            .or_else(|| self.pages.get(&DEFAULT_LANGUAGE))
            .expect("load() validated that the default language record exists")
    }

    /// Languages the store actually carries, in code order.
    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.pages.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageContent {
    pub nav: NavCopy,
    pub intro: IntroCopy,
    pub about: AboutCopy,
    pub hero: HeroCopy,
    pub projects: ProjectsCopy,
    pub contact: ContactCopy,
    pub about_full: AboutFullCopy,
    pub hobbies: HobbiesCopy,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavCopy {
    pub brand: String,
    pub intro: String,
    pub about: String,
    pub projects: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntroCopy {
    pub title: String,
    pub subtitle: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutCopy {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub button: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub cta: String,
    pub slides: Vec<HeroSlide>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroSlide {
    pub img: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsCopy {
    pub title: String,
    pub subtitle: String,
    pub button: String,
    pub items: Vec<ProjectCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectCard {
    pub img: String,
    pub title: String,
    pub desc: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactCopy {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutFullCopy {
    pub title: String,
    pub subtitle: String,
    /// Paragraphs separated by newlines; blank lines render as spacing.
    pub text: String,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HobbiesCopy {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<HobbyCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HobbyCard {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

/// Fetch and parse the content dictionary. One attempt, no retry: a failure
/// leaves the caller on its loading state and the site stays blank until a
/// reload.
pub async fn load() -> Result<ContentStore, ContentError> {
    let url = resource_url(&CONTENT_JSON.to_string());
    let body = reqwest::get(&url)
        .await
        .map_err(ContentError::Fetch)?
        .error_for_status()
        .map_err(ContentError::Fetch)?
        .text()
        .await
        .map_err(ContentError::Fetch)?;
    parse(&body)
}

/// Parse a content document and check it carries the default language.
pub fn parse(raw: &str) -> Result<ContentStore, ContentError> {
    let store: ContentStore = serde_json::from_str(raw).map_err(ContentError::Parse)?;
    if !store.pages.contains_key(&DEFAULT_LANGUAGE) {
        return Err(ContentError::MissingLanguage(DEFAULT_LANGUAGE));
    }
    Ok(store)
}

// Bundled asset paths are origin-relative; reqwest wants an absolute URL.
#[cfg(target_arch = "wasm32")]
fn resource_url(path: &str) -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map(|origin| format!("{origin}{path}"))
        .unwrap_or_else(|| path.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn resource_url(path: &str) -> String {
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for code in [LanguageCode::En, LanguageCode::Nl] {
            assert_eq!(code.as_str().parse::<LanguageCode>().unwrap(), code);
        }
        assert!("fr".parse::<LanguageCode>().is_err());
        assert!("EN".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn unknown_language_key_is_a_parse_error() {
        let err = parse(r#"{ "fr": {} }"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn missing_default_language_is_rejected() {
        let err = parse("{}").unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingLanguage(LanguageCode::En)
        ));
    }

    #[test]
    fn page_falls_back_to_the_default_language() {
        let fixture = include_str!("../tests/fixtures/minimal_content.json");
        let store = parse(fixture).unwrap();

        // The fixture only carries "en"; asking for "nl" must not panic.
        let en = store.page(LanguageCode::En);
        let nl = store.page(LanguageCode::Nl);
        assert_eq!(en, nl);
        assert_eq!(store.languages().collect::<Vec<_>>(), [LanguageCode::En]);
    }
}
