//! Drives selection and emission over a corpus.

use tracing::info;

use crate::corpus::{Corpus, SynsetRecord};
use crate::emitter;
use crate::error::ExportResult;
use crate::sink::LineSink;
use crate::vocabulary::BOOT_VOCABULARY;

/// Streams the boot vocabulary plus one block per selected record into a
/// sink.
///
/// The whole run is a single forward pass: preamble, then one synchronous
/// emit per record in corpus order. Nothing is buffered across records and
/// nothing is revisited, so re-running against an unchanged corpus yields
/// byte-identical output.
pub struct SynsetExporter<'a, C: Corpus> {
    corpus: &'a C,
}

impl<'a, C: Corpus> SynsetExporter<'a, C> {
    pub fn new(corpus: &'a C) -> Self {
        Self { corpus }
    }

    /// Run one export pass. With a term, only the records the corpus
    /// associates with it are emitted; an unmatched term yields the
    /// preamble alone, which is success, not an error.
    pub fn export<S: LineSink>(&self, term: Option<&str>, sink: &mut S) -> ExportResult<()> {
        for line in BOOT_VOCABULARY {
            sink.write_line(line)?;
        }

        let selected: Vec<&SynsetRecord> = match term {
            Some(term) => self.corpus.lookup(term),
            None => self.corpus.all_records().iter().collect(),
        };

        for record in &selected {
            emitter::emit_synset(record, sink)?;
        }

        info!(
            records = selected.len(),
            term = term.unwrap_or("<all>"),
            "export complete"
        );
        Ok(())
    }
}
