//! Per-synset statement block emission.

use tracing::debug;

use crate::corpus::SynsetRecord;
use crate::error::ExportResult;
use crate::sink::LineSink;
use crate::statement::{GroundExpr, Line};
use crate::symbols;

/// Emit the full statement block for one synset record.
///
/// Block order is fixed: a header comment, the definition statement, one
/// statement per lemma, the synset-name marker, then one association line
/// per lemma. Every association line carries the symbol of the block's
/// *final* lemma rather than its own; downstream loaders consume this
/// exact shape, so it is kept as-is.
pub fn emit_synset<S: LineSink>(record: &SynsetRecord, sink: &mut S) -> ExportResult<()> {
    debug!(
        synset = %record.name,
        lemmas = record.lemmas.len(),
        "emitting synset block"
    );

    sink.write_line(&Line::Blank.to_string())?;
    sink.write_line(&Line::Comment(format!("Synset: {}", record.name)).to_string())?;

    let def_symbol = symbols::definition_symbol(&record.name);
    sink.write_line(
        &Line::Assignment {
            symbol: def_symbol.clone(),
            expr: GroundExpr::scoped(
                GroundExpr::symbol("$def"),
                GroundExpr::literal(record.definition.to_lowercase()),
            ),
        }
        .to_string(),
    )?;

    let mut lemma_symbols = Vec::with_capacity(record.lemmas.len());
    for lemma in &record.lemmas {
        let lemma_symbol = symbols::lemma_symbol(&record.name, &lemma.name);
        sink.write_line(
            &Line::Assignment {
                symbol: lemma_symbol.clone(),
                expr: GroundExpr::scoped(
                    GroundExpr::literal(lemma.name.to_lowercase()),
                    GroundExpr::symbol(def_symbol.clone()),
                ),
            }
            .to_string(),
        )?;
        lemma_symbols.push(lemma_symbol);
    }

    sink.write_line(&Line::Blank.to_string())?;
    sink.write_line(
        &Line::Comment(
            "Record the synset name, and its association to the above symbols for posterity"
                .to_string(),
        )
        .to_string(),
    )?;

    let marker_symbol = symbols::synset_marker_symbol(&record.name);
    sink.write_line(
        &Line::Assignment {
            symbol: marker_symbol.clone(),
            expr: GroundExpr::data_node("$ss", record.name.clone()),
        }
        .to_string(),
    )?;

    // A synset with no lemmas emits no association lines.
    if let Some(last_symbol) = lemma_symbols.last() {
        for _ in &lemma_symbols {
            sink.write_line(
                &Line::Bare(GroundExpr::scoped(
                    GroundExpr::symbol(last_symbol.clone()),
                    GroundExpr::symbol(marker_symbol.clone()),
                ))
                .to_string(),
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::LemmaRecord;
    use crate::sink::WriterSink;

    fn emit_to_string(record: &SynsetRecord) -> String {
        let mut sink = WriterSink::new(Vec::new());
        emit_synset(record, &mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_block_for_zero_lemma_synset() {
        let record = SynsetRecord {
            name: "empty.n.01".to_string(),
            definition: "nothing here".to_string(),
            lemmas: vec![],
        };
        let out = emit_to_string(&record);

        assert!(out.contains("$def_empty.n.01 = Ground($def : \"nothing here\")"));
        assert!(out.contains("$ss_empty.n.01 = Ground(DataNode($ss; \"empty.n.01\"))"));
        // No lemma statements and no association lines.
        assert!(!out.contains("Ground($empty"));
    }

    #[test]
    fn test_association_lines_reuse_final_lemma_symbol() {
        let record = SynsetRecord {
            name: "dog.n.01".to_string(),
            definition: "a member of the genus canis".to_string(),
            lemmas: vec![
                LemmaRecord {
                    name: "dog".to_string(),
                },
                LemmaRecord {
                    name: "domestic_dog".to_string(),
                },
            ],
        };
        let out = emit_to_string(&record);

        let associations: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("Ground("))
            .collect();
        assert_eq!(
            associations,
            vec![
                "Ground($dog.n.01.domestic_dog : $ss_dog.n.01)",
                "Ground($dog.n.01.domestic_dog : $ss_dog.n.01)",
            ]
        );
    }

    #[test]
    fn test_definition_and_lemma_text_are_lowercased() {
        let record = SynsetRecord {
            name: "Dog.N.01".to_string(),
            definition: "A Member of the Genus Canis".to_string(),
            lemmas: vec![LemmaRecord {
                name: "Domestic_Dog".to_string(),
            }],
        };
        let out = emit_to_string(&record);

        assert!(out.contains("$def_dog.n.01 = Ground($def : \"a member of the genus canis\")"));
        assert!(out.contains("$dog.n.01.domestic_dog = Ground(\"domestic_dog\" : $def_dog.n.01)"));
        // The marker literal keeps the original casing.
        assert!(out.contains("$ss_dog.n.01 = Ground(DataNode($ss; \"Dog.N.01\"))"));
    }
}
