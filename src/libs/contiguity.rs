use anyhow::bail;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::io::BufRead;

/// Outcome of one pass over a transcript info file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Genes flagged as non-contiguous, in first-flagged order.
    pub broken_genes: Vec<String>,
    /// gene -> transcripts, both in first-seen order.
    pub gene_transcripts: IndexMap<String, Vec<String>>,
    /// Number of distinct gene ids in the input.
    pub genes_seen: usize,
}

impl ScanReport {
    /// Transcripts of the broken genes, grouped by gene in first-flagged
    /// order, each gene's transcripts in recorded order.
    pub fn broken_transcripts(&self) -> Vec<&str> {
        self.broken_genes
            .iter()
            .filter_map(|gn| self.gene_transcripts.get(gn))
            .flatten()
            .map(|tr| tr.as_str())
            .collect()
    }
}

/// Detects genes whose transcripts are split across non-adjacent blocks.
///
/// The detection rule is intentionally kept identical to the historical
/// checker shipped with the expression estimator: a gene pair is flagged when
/// a line's gene equals the most recently *introduced* gene while the block
/// currently open belongs to a different, re-opened gene. Some interleavings
/// of three or more genes, and a lone `A B A` bridge with no further lines,
/// slip through. Do not strengthen the rule; downstream consumers rely on
/// matching the original reports.
#[derive(Debug, Default)]
pub struct ContiguityScanner {
    // gene of the contiguous block currently open
    group_gene: String,
    // most recent gene id that was new when first seen
    last_new_gene: String,
    seen: HashSet<String>,
    broken: Vec<String>,
    gene_transcripts: IndexMap<String, Vec<String>>,
}

impl ContiguityScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one (gene, transcript) record, in file order.
    pub fn observe(&mut self, gene: &str, transcript: &str) {
        self.gene_transcripts
            .entry(gene.to_string())
            .or_default()
            .push(transcript.to_string());

        if gene == self.last_new_gene {
            if self.group_gene != self.last_new_gene {
                // We came back to the last introduced gene while inside a
                // re-opened block, so both blocks interleave.
                if !self.broken.iter().any(|gn| *gn == self.group_gene) {
                    self.broken.push(self.group_gene.clone());
                }
                if !self.broken.iter().any(|gn| *gn == self.last_new_gene) {
                    self.broken.push(self.last_new_gene.clone());
                }
            }
        } else if self.seen.insert(gene.to_string()) {
            self.last_new_gene = gene.to_string();
            self.group_gene = gene.to_string();
        } else {
            // Re-opening a block that was closed earlier.
            self.group_gene = gene.to_string();
        }
    }

    pub fn finish(self) -> ScanReport {
        ScanReport {
            broken_genes: self.broken,
            genes_seen: self.seen.len(),
            gene_transcripts: self.gene_transcripts,
        }
    }
}

/// Scans a transcript info file.
///
/// Lines starting with `#` are comments. Every other line needs at least two
/// whitespace-separated fields, gene id then transcript id; extra fields
/// (transcript lengths etc.) are ignored. The first malformed line aborts the
/// whole scan.
pub fn scan<R: BufRead>(reader: R) -> anyhow::Result<ScanReport> {
    let mut scanner = ContiguityScanner::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(gene), Some(transcript)) => scanner.observe(gene, transcript),
            _ => bail!(
                "the transcript file does not seem to have a valid format in line:\n{}",
                line
            ),
        }
    }

    Ok(scanner.finish())
}
