use itak_types::{Definition, Entry, Example, LinkMeta, PartOfSpeech, Pronunciation};

use super::suffix_entry;
use crate::{Locale, SentenceFormatter, render, render_code, render_page, render_with};

#[test]
fn test_english_page() {
    let output = render(&suffix_entry(), Locale::En);

    let expected = [
        "==Ainu==",
        "",
        "===Pronunciation===",
        "* {{IPA|ain|...}}",
        "",
        "===Etymology===",
        "{{affix|ain|-re|-e}}",
        "",
        "===Suffix===",
        "{{head|ain|suffix}}",
        "# causative suffix",
        "#: {{ux|ain|ek|to come}}",
        "#: {{ux|ain|ekte|to make come}}",
        "",
        "====Usage====",
        "Usage note here.",
    ]
    .join("\n");

    assert_eq!(output, expected);
    assert!(!output.starts_with('\n'));
}

#[test]
fn test_japanese_page() {
    let output = render(&suffix_entry(), Locale::Ja);

    let expected = [
        "=={{L|ain}}==",
        "{{ain-kana}}",
        "==={{pron}}===",
        "* {{ain-IPA}}",
        "==={{etym}}===",
        "{{affix|ain|-re|-e}}",
        "==={{suffix}}===",
        "{{head|ain|suffix}}",
        "# causative suffix",
        "#: {{ux|ain|ek|to come}}",
        "#: {{ux|ain|ekte|to make come}}",
        "===={{usage}}====",
        "Usage note here.",
    ]
    .join("\n");

    assert_eq!(output, expected);
    assert!(!output.contains("\n\n"));
}

#[test]
fn test_unknown_locale_renders_japanese() {
    let entry = suffix_entry();
    assert_eq!(render_code(&entry, "fr"), render(&entry, Locale::Ja));
    assert_eq!(render_code(&entry, "en"), render(&entry, Locale::En));
}

#[test]
fn test_render_is_deterministic() {
    let entry = suffix_entry();
    for locale in [Locale::En, Locale::Ja] {
        assert_eq!(render(&entry, locale), render(&entry, locale));
    }
}

#[test]
fn test_references_only_with_attribution() {
    let mut entry = suffix_entry();
    assert!(!render(&entry, Locale::En).contains("References"));
    assert!(!render(&entry, Locale::Ja).contains("{{reflist}}"));

    entry.definitions[0].examples[1] = Example::new("ekte", "to make come").with_ref("Tamura 1996");

    let en = render(&entry, Locale::En);
    assert!(en.contains("\n\n===References===\n{{reflist}}"));

    let ja = render(&entry, Locale::Ja);
    assert!(ja.ends_with("==={{reference}}===\n{{reflist}}"));
}

#[test]
fn test_omitting_etymology_only_drops_its_section() {
    let full = suffix_entry();
    let mut bare = suffix_entry();
    bare.etymology.clear();

    for locale in [Locale::En, Locale::Ja] {
        let with = render(&full, locale);
        let without = render(&bare, locale);
        let removed = match locale {
            Locale::En => "\n\n===Etymology===\n{{affix|ain|-re|-e}}",
            Locale::Ja => "\n==={{etym}}===\n{{affix|ain|-re|-e}}",
        };
        assert_eq!(with.replacen(removed, "", 1), without);
    }
}

#[test]
fn test_omitting_usage_only_drops_its_section() {
    let mut entry = suffix_entry();
    entry.usage = None;
    let without = render(&entry, Locale::En);
    assert_eq!(
        render(&suffix_entry(), Locale::En).replacen("\n\n====Usage====\nUsage note here.", "", 1),
        without
    );

    entry.usage = Some(String::new());
    assert_eq!(render(&entry, Locale::En), without);
}

#[test]
fn test_omitting_dialects_only_drops_their_label() {
    let mut with = suffix_entry();
    with.dialects = vec!["Saru".into(), "Chitose".into()];
    let without = suffix_entry();

    for locale in [Locale::En, Locale::Ja] {
        assert_eq!(
            render(&with, locale).replacen(" {{tlb|ain|Saru|Chitose}}", "", 1),
            render(&without, locale)
        );
    }
}

#[test]
fn test_omitting_a_related_group_only_drops_its_section() {
    let mut with = suffix_entry();
    with.synonyms = vec![LinkMeta::new("-ke")];
    with.antonyms = vec![LinkMeta::new("-an")];
    let mut without = with.clone();
    without.synonyms.clear();

    for locale in [Locale::En, Locale::Ja] {
        let removed = match locale {
            Locale::En => "\n\n====Synonyms====\n* {{l|ain|-ke}}",
            Locale::Ja => "\n===={{syn}}====\n* {{l|ain|-ke}}",
        };
        assert_eq!(render(&with, locale).replacen(removed, "", 1), render(&without, locale));
    }
}

#[test]
fn test_pronunciation_can_be_disabled() {
    let mut entry = suffix_entry();
    entry.pronunciation = Some(Pronunciation { ipa: Some(true) });
    assert_eq!(render(&entry, Locale::Ja), render(&suffix_entry(), Locale::Ja));

    entry.pronunciation = Some(Pronunciation { ipa: Some(false) });
    let output = render(&entry, Locale::Ja);
    assert!(!output.contains("{{pron}}"));
    assert!(!output.contains("{{ain-IPA}}"));
    assert!(output.starts_with("=={{L|ain}}==\n{{ain-kana}}\n==={{etym}}==="));
}

#[test]
fn test_locales_keep_section_order() {
    let entry = suffix_entry();
    let en = render(&entry, Locale::En);
    let ja = render(&entry, Locale::Ja);

    fn order(text: &str, markers: &[&str]) -> Vec<usize> {
        markers.iter().map(|m| text.find(*m).expect(m)).collect()
    }
    let en_pos = order(&en, &["==Ainu==", "Pronunciation", "Etymology", "Suffix", "# causative", "Usage"]);
    let ja_pos = order(&ja, &["{{L|ain}}", "{{pron}}", "{{etym}}", "{{suffix}}", "# causative", "{{usage}}"]);

    assert!(en_pos.windows(2).all(|w| w[0] < w[1]));
    assert!(ja_pos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_related_groups_in_fixed_order() {
    let mut entry = Entry::new("ape", PartOfSpeech::Noun, vec![Definition::new("fire")]);
    entry.antonyms = vec![LinkMeta::new("wakka")];
    entry.derived = vec![
        LinkMeta {
            term: "apeoy".into(),
            tran: Some("hearth".into()),
            pos: None,
        },
        LinkMeta::new("apekes"),
    ];
    entry.synonyms = vec![LinkMeta::new("unci")];

    let en = render(&entry, Locale::En);
    assert!(en.ends_with(
        "====Derived terms====\n* {{l|ain|apeoy}} (hearth)\n* {{l|ain|apekes}}\n\n\
         ====Synonyms====\n* {{l|ain|unci}}\n\n\
         ====Antonyms====\n* {{l|ain|wakka}}"
    ));
    assert!(!en.contains("Related terms"));

    let ja = render(&entry, Locale::Ja);
    assert!(ja.contains("===={{drv}}====\n* {{l|ain|apeoy}} (hearth)"));
    assert!(ja.contains("===={{syn}}====\n* {{l|ain|unci}}\n===={{ant}}===="));
    assert!(!ja.contains("{{rel}}"));
}

#[test]
fn test_verb_headword_line() {
    let entry: Entry = serde_json::from_value(serde_json::json!({
        "lemma": "kor",
        "pos": "verb",
        "pos_args": { "transitivity": 2, "plural": "korpa" },
        "sub_type": "auxiliary",
        "dialects": ["Saru", "Horobetsu"],
        "definitions": [{ "gloss": "to have" }]
    }))
    .unwrap();

    let output = render(&entry, Locale::En);
    assert!(output.contains(
        "\n\n===Verb===\n{{ain-verb|2|pl=korpa}} {{context|auxiliary|lang=ain}} {{tlb|ain|Saru|Horobetsu}}\n# to have"
    ));
}

#[test]
fn test_separator_closes_entry() {
    let mut entry = suffix_entry();
    entry.add_separator = true;
    assert!(render(&entry, Locale::En).ends_with("Usage note here.\n----"));
    assert!(render(&entry, Locale::Ja).ends_with("Usage note here.\n----"));
}

#[test]
fn test_page_joins_entries() {
    let mut first = suffix_entry();
    first.add_separator = true;
    let second = Entry::new(
        "ape",
        PartOfSpeech::Noun,
        vec![Definition::new("fire").with_example(Example::new("ape an", "there is fire"))],
    );

    let page = render_page(&[first.clone(), second.clone()], Locale::Ja);
    assert_eq!(
        page,
        format!("{}\n{}", render(&first, Locale::Ja), render(&second, Locale::Ja))
    );
    assert!(page.contains("----\n=={{L|ain}}=="));
}

struct Upper;

impl SentenceFormatter for Upper {
    fn format(&self, sentence: &str) -> String {
        sentence.to_uppercase()
    }
}

#[test]
fn test_sentence_hook_applies_to_example_text() {
    let output = render_with(&suffix_entry(), Locale::En, &Upper);
    assert!(output.contains("#: {{ux|ain|EK|to come}}"));
    assert!(output.contains("# causative suffix"));
}
