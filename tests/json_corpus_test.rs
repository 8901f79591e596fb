//! File-backed corpus loading tests.

use std::io::Write;

use tempfile::NamedTempFile;

use wordnet_mbql::{Corpus, ExportError, JsonCorpus};

fn write_corpus_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus file");
    file.write_all(json.as_bytes()).expect("write corpus json");
    file
}

#[test]
fn test_load_and_lookup_from_json_file() {
    let file = write_corpus_file(
        r#"[
            {
                "name": "dog.n.01",
                "definition": "a member of the genus canis",
                "lemmas": [{"name": "dog"}, {"name": "domestic_dog"}]
            },
            {
                "name": "cat.n.01",
                "definition": "feline mammal",
                "lemmas": [{"name": "cat"}]
            }
        ]"#,
    );

    let corpus = JsonCorpus::load(file.path()).expect("corpus should load");
    assert_eq!(corpus.len(), 2);

    let hits = corpus.lookup("domestic_dog");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "dog.n.01");
    assert_eq!(hits[0].lemmas.len(), 2);
}

#[test]
fn test_lemmas_field_is_optional() {
    let file = write_corpus_file(r#"[{"name": "empty.n.01", "definition": "nothing"}]"#);

    let corpus = JsonCorpus::load(file.path()).expect("corpus should load");
    assert_eq!(corpus.len(), 1);
    assert!(corpus.all_records()[0].lemmas.is_empty());
}

#[test]
fn test_malformed_json_is_a_parse_fault() {
    let file = write_corpus_file("[{ not json");

    let err = JsonCorpus::load(file.path()).expect_err("load must fail");
    assert!(matches!(err, ExportError::CorpusParse { .. }));
}

#[test]
fn test_missing_file_is_a_read_fault() {
    let err = JsonCorpus::load(std::path::Path::new("/nonexistent/corpus.json"))
        .expect_err("load must fail");
    assert!(matches!(err, ExportError::CorpusRead { .. }));
}
