//! Boot vocabulary emitted ahead of any corpus-derived statement.
//!
//! Downstream loaders resolve the stream in two passes (collect all
//! definitions, then resolve references), so the adjective association
//! lines below may reference `$def_adverb.n.01` before any corpus block
//! defines it.

/// Fixed preamble, reproduced byte-for-byte as downstream consumers expect
/// it — including the repeated adjective association line.
pub const BOOT_VOCABULARY: &[&str] = &[
    "# General symbols which we will use below",
    "$en = Ground(\"English Language\")",
    "$pos = Ground($en : \"Part of Speech\")",
    "$def = Ground($en : \"Definition\")",
    "$syn = Ground($en : \"Synonym\")",
    "$a = Ground($pos : \"Adjective\")",
    "$s = Ground($pos : \"Adjective Satellite\")",
    "$r = Ground($pos : \"Adverb\")",
    "$n = Ground($pos : \"Noun\")",
    "$v = Ground($pos : \"Verb\")",
    "# Link these definitions to words in the corpus, where appropriate",
    "# We can index into symbols we expect to be created. Cycles are not a problem",
    "Ground($a : $def_adverb.n.01)",
    "Ground($a : $def_adverb.n.01)",
    "$ss = Ground(\"Wordnet\" : \"Synset Name\")",
    "",
    "# Dump of synsets, lemmas, etc",
];
