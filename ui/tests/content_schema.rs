//! Content completeness test.
//!
//! The site fetches `assets/content.json` at runtime and renders every
//! field of every language record, so the committed file must deserialize
//! into the typed store and each record must carry usable copy. A language
//! that parses but ships empty lists would render hollow sections; catch
//! that here instead of in the browser.

use ui::content::{self, LanguageCode};

const CONTENT: &str = include_str!("../assets/content.json");

#[test]
fn committed_content_parses_into_the_store() {
    let store = content::parse(CONTENT).expect("assets/content.json must deserialize");
    assert!(
        store.languages().any(|l| l == content::DEFAULT_LANGUAGE),
        "default language record is required"
    );
}

#[test]
fn every_language_record_is_fully_populated() {
    let store = content::parse(CONTENT).unwrap();

    for lang in store.languages() {
        let page = store.page(lang);

        assert!(!page.nav.brand.is_empty(), "{lang}: nav brand");
        for label in [
            &page.nav.intro,
            &page.nav.about,
            &page.nav.projects,
            &page.nav.contact,
        ] {
            assert!(!label.is_empty(), "{lang}: nav label");
        }

        assert!(
            !page.hero.slides.is_empty(),
            "{lang}: hero needs at least one slide"
        );
        for slide in &page.hero.slides {
            assert!(!slide.img.is_empty(), "{lang}: slide image");
            assert!(!slide.title.is_empty(), "{lang}: slide title");
        }

        assert!(!page.projects.items.is_empty(), "{lang}: project cards");
        assert!(!page.hobbies.items.is_empty(), "{lang}: hobby cards");
        assert!(!page.contact.links.is_empty(), "{lang}: social links");
        assert!(
            page.about_full.text.contains('\n'),
            "{lang}: long-form bio should have multiple paragraphs"
        );
    }
}

#[test]
fn both_site_languages_are_present() {
    let store = content::parse(CONTENT).unwrap();
    let langs: Vec<LanguageCode> = store.languages().collect();
    assert_eq!(langs, [LanguageCode::En, LanguageCode::Nl]);
}
