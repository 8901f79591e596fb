//! wordnet-mbql: exports a synset corpus as MBQL Ground statements.
//!
//! The output is a flat, line-oriented stream of assertions used to seed a
//! semantic knowledge base with English vocabulary:
//! - A fixed boot-vocabulary preamble (language, part-of-speech tags,
//!   relation markers) emitted once up front.
//! - One block per synset: its definition, one statement per lemma, a
//!   synset-name marker, and the lemma/marker associations.
//!
//! Symbols are minted by pure string rules rather than a registry, so any
//! statement can reference any other symbol by recomputing its name.
//! Statement order is emission order, not dependency order; downstream
//! loaders resolve the stream in two passes, which makes forward and cyclic
//! references legal.

pub mod corpus;
pub mod emitter;
pub mod error;
pub mod export;
pub mod sink;
pub mod statement;
pub mod symbols;
pub mod vocabulary;

// Re-export commonly used types
pub use corpus::{Corpus, JsonCorpus, LemmaRecord, SynsetRecord};
pub use error::{ExportError, ExportResult};
pub use export::SynsetExporter;
pub use sink::{LineSink, WriterSink};
pub use statement::{GroundExpr, Line};
pub use vocabulary::BOOT_VOCABULARY;
