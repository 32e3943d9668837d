mod render_tests;

use itak_types::Entry;

/// The suffix entry used across the scenario tests
pub(crate) fn suffix_entry() -> Entry {
    serde_json::from_value(serde_json::json!({
        "lemma": "test",
        "pos": "suffix",
        "definitions": [{
            "gloss": "causative suffix",
            "examples": [
                { "text": "ek", "translation": "to come" },
                { "text": "ekte", "translation": "to make come" }
            ]
        }],
        "etymology": [{ "term": "-re" }, { "term": "-e" }],
        "usage": "Usage note here.",
        "addSeparator": false
    }))
    .expect("fixture entry")
}
