//! Deterministic symbol naming.
//!
//! Symbols are minted by pure string rules instead of a shared registry,
//! so a statement emitted anywhere in the run can reference a symbol
//! minted anywhere else just by recomputing the same name. No collision
//! detection happens here: synset names are unique across the corpus and
//! lemma names are unique within their synset.

/// `$` + lowercase(`synsetName.lemmaName`)
pub fn lemma_symbol(synset_name: &str, lemma_name: &str) -> String {
    format!("${}.{}", synset_name, lemma_name).to_lowercase()
}

/// `$def_` + lowercase(synsetName)
pub fn definition_symbol(synset_name: &str) -> String {
    format!("$def_{}", synset_name.to_lowercase())
}

/// `$ss_` + lowercase(synsetName). The marker's `DataNode` literal keeps
/// the original casing; only the symbol itself is lowercased.
pub fn synset_marker_symbol(synset_name: &str) -> String {
    format!("$ss_{}", synset_name.to_lowercase())
}
