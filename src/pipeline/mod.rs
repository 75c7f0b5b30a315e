use std::path::PathBuf;

use log::{info, warn};

use crate::error::Result;
use crate::fasta;
use crate::seq::{self, AnnotatedSequence};
use crate::stats::{self, Composition};

/// Seed used when none is requested, so repeated runs give the same file.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Debug)]
pub struct RunConfig {
    pub length: usize,
    pub seq_id: String,
    pub description: String,
    pub name: String,
    /// `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub line_width: usize,
    /// Directory for the output file; the working directory when unset.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct RunOutput {
    pub path: PathBuf,
    pub sequence: AnnotatedSequence,
    pub stats: Composition,
}

/// Generates, annotates, saves and measures one sequence.
pub fn run(config: &RunConfig) -> Result<RunOutput> {
    if config.seq_id.is_empty() {
        warn!("sequence ID is empty, output file will be named .fasta");
    }

    // one generator for both draws: sequence first, insertion point second
    let mut rng = seq::seeded_rng(config.seed);
    let dna = seq::generate_dna_sequence(config.length, &mut rng);
    let sequence = seq::insert_name(&dna, &config.name, &mut rng);
    info!("annotated sequence of {} characters, name at position {}", sequence.len(), sequence.position());
    if sequence.is_empty() {
        warn!("sequence and name are both empty, record will hold only a header");
    }

    let header = fasta::build_header(&config.seq_id, &config.description);
    let filename = fasta::fasta_filename(&config.seq_id);
    let path = match &config.output_dir {
        Some(dir) => dir.join(&filename),
        None => PathBuf::from(&filename),
    };

    fasta::save_to_fasta(&path, &header, sequence.as_str(), config.line_width)?;

    let stats = stats::calculate_stats(sequence.as_str());
    Ok(RunOutput { path, sequence, stats })
}
