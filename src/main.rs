use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use nameseq::logger;
use nameseq::pipeline::{self, RunConfig};
use nameseq::prompt::Prompter;
use nameseq::report;
use nameseq::{Error, Result};

use log::debug;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "nameseq", about = "Random DNA sequence with an embedded name, saved as FASTA")]
struct Opt {
    /// Sequence length (prompted for when omitted)
    #[structopt(short, long)]
    length: Option<usize>,

    /// Sequence ID, also the output file stem
    #[structopt(short, long)]
    id: Option<String>,

    /// Sequence description
    #[structopt(short, long)]
    description: Option<String>,

    /// Name to embed in the sequence
    #[structopt(short, long)]
    name: Option<String>,

    /// Seed for the random generator
    #[structopt(short, long, default_value = "42")]
    seed: u64,

    /// Seed from OS entropy instead of --seed
    #[structopt(short, long)]
    random: bool,

    /// Maximum characters per sequence line
    #[structopt(short = "w", long, default_value = "60")]
    line_width: usize,

    /// Directory for the output file
    #[structopt(short, long, parse(from_os_str))]
    output_dir: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn prompt_or<R: BufRead, W: Write>(value: &Option<String>, prompter: &mut Prompter<R, W>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v.trim().to_string()),
        None => prompter.read_text(label),
    }
}

fn collect_config<R: BufRead, W: Write>(opt: &Opt, prompter: &mut Prompter<R, W>) -> Result<RunConfig> {
    if opt.line_width == 0 {
        return Err(Error::InvalidInput("--line-width must be greater than zero".to_string()));
    }

    let length = match opt.length {
        Some(0) => return Err(Error::InvalidInput("--length must be greater than zero".to_string())),
        Some(n) => n,
        None => prompter.read_length()?,
    };
    let seq_id = prompt_or(&opt.id, prompter, "Sequence ID")?;
    let description = prompt_or(&opt.description, prompter, "Sequence description")?;
    let name = prompt_or(&opt.name, prompter, "Name")?;

    Ok(RunConfig {
        length,
        seq_id,
        description,
        name,
        seed: if opt.random { None } else { Some(opt.seed) },
        line_width: opt.line_width,
        output_dir: opt.output_dir.clone(),
    })
}

fn try_main(opt: &Opt) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = collect_config(opt, &mut prompter)?;
    debug!("{:?}", config);

    let output = pipeline::run(&config)?;
    let filename = output.path.display().to_string();
    print!("{}", report::render_report(&filename, &output.stats));
    io::stdout().flush()?;
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    if let Err(e) = logger::init_logger(logger::level_for_verbosity(opt.verbose)) {
        eprintln!("failed to initialise logger: {}", e);
    }

    if let Err(e) = try_main(&opt) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nameseq::fasta::DEFAULT_LINE_WIDTH;
    use nameseq::pipeline::DEFAULT_SEED;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn defaults_match_interactive_tool() {
        let opt = Opt::from_iter(&["nameseq"]);
        assert_eq!(opt.seed, DEFAULT_SEED);
        assert_eq!(opt.line_width, DEFAULT_LINE_WIDTH);
        assert!(!opt.random);

        let mut p = prompter("x\n25\nA123\nRandom test sequence\nMike\n");
        let config = collect_config(&opt, &mut p).unwrap();
        assert_eq!(config.length, 25);
        assert_eq!(config.seq_id, "A123");
        assert_eq!(config.description, "Random test sequence");
        assert_eq!(config.name, "Mike");
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn flags_skip_prompts() {
        let opt = Opt::from_iter(&["nameseq", "-l", "10", "-i", "B7", "-d", "demo", "-n", "Ola", "--random", "-vv"]);
        let mut p = prompter("");
        let config = collect_config(&opt, &mut p).unwrap();
        assert_eq!(config.length, 10);
        assert_eq!(config.name, "Ola");
        assert_eq!(config.seed, None);
        assert_eq!(opt.verbose, 2);
        assert!(p.into_output().is_empty());
    }

    #[test]
    fn zero_length_flag_is_rejected() {
        let opt = Opt::from_iter(&["nameseq", "--length", "0"]);
        assert!(matches!(collect_config(&opt, &mut prompter("")), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn zero_line_width_is_rejected() {
        let opt = Opt::from_iter(&["nameseq", "-l", "5", "-w", "0"]);
        assert!(matches!(collect_config(&opt, &mut prompter("")), Err(Error::InvalidInput(_))));
    }
}
