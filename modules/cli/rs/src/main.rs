use clap::{Args, Parser, Subcommand};
use eyre::Result;

use dpalign_alignment_rs::pairwise::dp::{Tracer, tracer};
use dpalign_alignment_rs::pairwise::scoring::Linear;
use dpalign_alignment_rs::pairwise::{AlignedPair, Hirschberg, NeedlemanWunsch, SmithWaterman};
use dpalign_core_rs::parallelism;

// Hirschberg splits smaller than this are computed on a single thread
const PARALLEL_CELLS: usize = 1 << 16;

#[derive(Parser)]
#[command(name = "dpalign")]
#[command(about = "Global, local and linear-space pairwise alignment of two strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every DP step, including the filled score and backtrace tables
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Needleman-Wunsch global alignment
    Global {
        #[command(flatten)]
        input: Input,

        /// Don't penalize leading overhangs of either string
        #[arg(long)]
        overlap: bool,
    },

    /// Smith-Waterman local alignment, prints every co-optimal alignment
    Local {
        #[command(flatten)]
        input: Input,
    },

    /// Hirschberg linear-space global alignment
    Linear {
        #[command(flatten)]
        input: Input,

        /// Number of threads, negative values count back from the number of available cores
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        threads: isize,
    },
}

#[derive(Args)]
struct Input {
    /// First string
    #[arg(short, long)]
    first: String,

    /// Second string
    #[arg(short, long)]
    second: String,

    /// Reward for a match
    #[arg(short, long = "match", default_value_t = 1.0, allow_negative_numbers = true)]
    matches: f64,

    /// Penalty for a mismatch
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    mismatch: f64,

    /// Penalty for an insertion or deletion
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    indel: f64,
}

impl Input {
    fn scoring(&self) -> Result<Linear<i32>> {
        Ok(Linear::try_from_f64(self.matches, self.mismatch, self.indel)?)
    }

    fn sequences(&self) -> (Vec<char>, Vec<char>) {
        (self.first.chars().collect(), self.second.chars().collect())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let (mut noop, mut log) = (tracer::Noop, tracer::Log);
    let tracer: DynTracer = if cli.verbose { &mut log } else { &mut noop };

    match cli.command {
        Commands::Global { input, overlap } => cmd_global(input, overlap, tracer),
        Commands::Local { input } => cmd_local(input, tracer),
        Commands::Linear { input, threads } => cmd_linear(input, threads, tracer),
    }
}

fn report(kind: &str, input: &Input, pair: &AlignedPair<i32>) {
    println!(
        "{kind} alignment of \"{}\" and \"{}\":\n{pair}\nWith a score of {}",
        input.first,
        input.second,
        pair.score()
    );
}

// Tracers run on the rayon pool in linear-space mode
type DynTracer<'a> = &'a mut (dyn Tracer<i32> + Send);

fn cmd_global(input: Input, overlap: bool, mut tracer: DynTracer) -> Result<()> {
    let (seq1, seq2) = input.sequences();
    let aligner = NeedlemanWunsch::new(input.scoring()?).with_overlap(overlap);
    let alignment = aligner.align_traced(&seq1, &seq2, &mut tracer);

    let kind = if overlap { "Overlap" } else { "Global" };
    report(kind, &input, &alignment.render(&seq1, &seq2));
    Ok(())
}

fn cmd_local(input: Input, mut tracer: DynTracer) -> Result<()> {
    let (seq1, seq2) = input.sequences();
    let aligner = SmithWaterman::new(input.scoring()?);
    let alignments = aligner.align_all_traced(&seq1, &seq2, &mut tracer);

    log::info!("Found {} co-optimal local alignment(s)", alignments.len());
    for alignment in &alignments {
        report("Local", &input, &alignment.render(&seq1, &seq2));
    }
    Ok(())
}

fn cmd_linear(input: Input, threads: isize, mut tracer: DynTracer) -> Result<()> {
    let (seq1, seq2) = input.sequences();
    let mut aligner = Hirschberg::new(input.scoring()?);

    let threads = parallelism::available(threads)?;
    if threads > 1 {
        aligner = aligner.with_parallel_threshold(PARALLEL_CELLS);
    }
    let pool = parallelism::pool(threads as isize)?;
    let alignment = pool.install(|| aligner.align_traced(&seq1, &seq2, &mut tracer));

    report("Linear-space global", &input, &alignment.render(&seq1, &seq2));
    Ok(())
}
