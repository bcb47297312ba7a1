//! Command implementations and argument parsing for the graphgen CLI.

use std::io::{self, Write};
use std::num::ParseFloatError;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use graphgen_core::{
    CircularArc, GeneratorError, Graph, Instance, InstanceError, Literal,
    RandomCaterpillarConfig, RandomCircularArcConfig, generate_caterpillar, generate_circular_arc,
    generate_kneser, generate_random_caterpillar, generate_random_circular_arc, read_instance,
    write_instance,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_K: i64 = 1;
const DEFAULT_U: i64 = 0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "graphgen",
    about = "Generate caterpillar, Kneser and circular-arc graph instances."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a caterpillar from explicit leg counts.
    Caterpillar(CaterpillarCommand),
    /// Build a caterpillar with uniformly drawn leg counts.
    RandomCaterpillar(RandomCaterpillarCommand),
    /// Build the Kneser graph K(n, r).
    Kneser(KneserCommand),
    /// Build the intersection graph of explicit arcs.
    CircularArc(CircularArcCommand),
    /// Build the intersection graph of randomly drawn arcs.
    RandomCircularArc(RandomCircularArcCommand),
    /// Read a stored instance and summarise it.
    Inspect(InspectCommand),
}

impl Command {
    /// Name of the subcommand as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Caterpillar(_) => "caterpillar",
            Self::RandomCaterpillar(_) => "random-caterpillar",
            Self::Kneser(_) => "kneser",
            Self::CircularArc(_) => "circular-arc",
            Self::RandomCircularArc(_) => "random-circular-arc",
            Self::Inspect(_) => "inspect",
        }
    }
}

/// Where to store a generated instance and how to fill its vectors.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Write PREFIX.graph, PREFIX.list.k and PREFIX.list.u.
    #[arg(long, value_name = "PREFIX")]
    pub output: Option<PathBuf>,

    /// Value stored for every vertex in the `k` vector.
    #[arg(long, default_value_t = DEFAULT_K, allow_negative_numbers = true)]
    pub k: i64,

    /// Value stored for every vertex in the `u` vector.
    #[arg(long, default_value_t = DEFAULT_U, allow_negative_numbers = true)]
    pub u: i64,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            output: None,
            k: DEFAULT_K,
            u: DEFAULT_U,
        }
    }
}

/// Seed selection for the random generators.
#[derive(Debug, Args, Clone, Default)]
pub struct SeedArgs {
    /// Seed for reproducible output; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by `caterpillar`.
#[derive(Debug, Args, Clone)]
pub struct CaterpillarCommand {
    /// Leg count of each spine vertex, in spine order.
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub legs: Vec<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `random-caterpillar`.
#[derive(Debug, Args, Clone)]
pub struct RandomCaterpillarCommand {
    /// Number of spine vertices.
    #[arg(long)]
    pub spine_length: usize,

    /// Smallest leg count.
    #[arg(long, default_value_t = 0)]
    pub min_legs: usize,

    /// Largest leg count (inclusive).
    #[arg(long)]
    pub max_legs: usize,

    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `kneser`.
#[derive(Debug, Args, Clone)]
pub struct KneserCommand {
    /// Size of the ground set.
    #[arg(long)]
    pub n: usize,

    /// Size of each subset.
    #[arg(long)]
    pub r: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `circular-arc`.
#[derive(Debug, Args, Clone)]
pub struct CircularArcCommand {
    /// Arc as START:END; repeat for each arc.
    #[arg(long = "arc", value_name = "START:END", value_parser = parse_arc, required = true)]
    pub arcs: Vec<CircularArc>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `random-circular-arc`.
#[derive(Debug, Args, Clone)]
pub struct RandomCircularArcCommand {
    /// Number of arcs to draw.
    #[arg(long = "arcs")]
    pub arc_count: usize,

    /// Shortest arc length.
    #[arg(long)]
    pub min_length: f64,

    /// Longest arc length.
    #[arg(long)]
    pub max_length: f64,

    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by `inspect`.
#[derive(Debug, Args, Clone)]
pub struct InspectCommand {
    /// Prefix the instance was written under.
    pub prefix: PathBuf,
}

/// Failures parsing a `START:END` arc argument.
#[derive(Debug, Error)]
pub enum ArcArgError {
    /// The argument had no `:` separator.
    #[error("expected START:END, got `{raw}`")]
    MissingSeparator {
        /// Argument as supplied.
        raw: String,
    },
    /// A coordinate was not a number.
    #[error("invalid arc coordinate `{raw}`: {source}")]
    InvalidNumber {
        /// Coordinate as supplied.
        raw: String,
        /// Float parsing failure.
        #[source]
        source: ParseFloatError,
    },
    /// The coordinates do not describe a valid arc.
    #[error(transparent)]
    Invalid(#[from] GeneratorError),
}

/// Parses `START:END` into a validated [`CircularArc`].
///
/// # Errors
/// Returns [`ArcArgError`] when the separator is missing, a coordinate is not
/// a number, or the arc is out of range or degenerate.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::parse_arc;
///
/// let arc = parse_arc("10.5:2").expect("valid arc");
/// assert_eq!((arc.start(), arc.end()), (10.5, 2.0));
/// assert!(parse_arc("3:3").is_err());
/// ```
pub fn parse_arc(raw: &str) -> Result<CircularArc, ArcArgError> {
    let (start, end) = raw
        .split_once(':')
        .ok_or_else(|| ArcArgError::MissingSeparator {
            raw: raw.to_owned(),
        })?;
    Ok(CircularArc::new(coordinate(start)?, coordinate(end)?)?)
}

fn coordinate(raw: &str) -> Result<f64, ArcArgError> {
    raw.trim()
        .parse()
        .map_err(|source| ArcArgError::InvalidNumber {
            raw: raw.to_owned(),
            source,
        })
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator preconditions were violated.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Reading or writing an instance failed.
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

impl CliError {
    /// Stable code of the underlying core error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Generator(error) => error.code().as_str(),
            Self::Instance(error) => error.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Command that produced the instance.
    pub command: &'static str,
    /// Generated or loaded instance.
    pub instance: Instance,
    /// Subset of each vertex, for Kneser graphs.
    pub subsets: Option<Vec<Vec<usize>>>,
    /// Prefix the instance was written to or read from.
    pub prefix: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation, writing or reading fails.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::{Cli, run_cli};
/// use clap::Parser;
///
/// let cli = Cli::parse_from(["graphgen", "kneser", "--n", "5", "--r", "2"]);
/// let summary = run_cli(cli).expect("command succeeds");
/// assert_eq!(summary.instance.graph.edge_count(), 15);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    Span::current().record("command", field::display(cli.command.name()));
    let summary = match cli.command {
        Command::Caterpillar(command) => run_caterpillar(command),
        Command::RandomCaterpillar(command) => run_random_caterpillar(command),
        Command::Kneser(command) => run_kneser(command),
        Command::CircularArc(command) => run_circular_arc(command),
        Command::RandomCircularArc(command) => run_random_circular_arc(command),
        Command::Inspect(command) => run_inspect(command),
    }?;

    info!(
        command = summary.command,
        vertices = summary.instance.graph.vertex_count(),
        edges = summary.instance.graph.edge_count(),
        "command completed"
    );
    Ok(summary)
}

pub(super) fn run_caterpillar(command: CaterpillarCommand) -> Result<ExecutionSummary, CliError> {
    let graph = generate_caterpillar(&command.legs)?;
    finish("caterpillar", graph, None, command.output)
}

#[instrument(name = "cli.random_caterpillar", err, skip(command), fields(seed = field::Empty))]
pub(super) fn run_random_caterpillar(
    command: RandomCaterpillarCommand,
) -> Result<ExecutionSummary, CliError> {
    let config = RandomCaterpillarConfig {
        spine_length: command.spine_length,
        min_legs: command.min_legs,
        max_legs: command.max_legs,
    };
    let mut rng = seeded_rng(&command.seed);
    let graph = generate_random_caterpillar(&config, &mut rng)?;
    finish("random-caterpillar", graph, None, command.output)
}

pub(super) fn run_kneser(command: KneserCommand) -> Result<ExecutionSummary, CliError> {
    let (graph, subsets) = generate_kneser(command.n, command.r)?.into_parts();
    finish("kneser", graph, Some(subsets), command.output)
}

pub(super) fn run_circular_arc(command: CircularArcCommand) -> Result<ExecutionSummary, CliError> {
    let graph = generate_circular_arc(&command.arcs)?;
    finish("circular-arc", graph, None, command.output)
}

#[instrument(name = "cli.random_circular_arc", err, skip(command), fields(seed = field::Empty))]
pub(super) fn run_random_circular_arc(
    command: RandomCircularArcCommand,
) -> Result<ExecutionSummary, CliError> {
    let config = RandomCircularArcConfig {
        arc_count: command.arc_count,
        min_length: command.min_length,
        max_length: command.max_length,
    };
    let mut rng = seeded_rng(&command.seed);
    let graph = generate_random_circular_arc(&config, &mut rng)?;
    finish("random-circular-arc", graph, None, command.output)
}

pub(super) fn run_inspect(command: InspectCommand) -> Result<ExecutionSummary, CliError> {
    let instance = read_instance(&command.prefix)?;
    Ok(ExecutionSummary {
        command: "inspect",
        instance,
        subsets: None,
        prefix: Some(command.prefix),
    })
}

/// Seeds from `--seed` when given, otherwise from OS entropy.
///
/// The seed in use is recorded on the current span only when it was supplied.
fn seeded_rng(args: &SeedArgs) -> SmallRng {
    match args.seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    }
}

fn finish(
    command: &'static str,
    graph: Graph,
    subsets: Option<Vec<Vec<usize>>>,
    output: OutputArgs,
) -> Result<ExecutionSummary, CliError> {
    let vertex_count = graph.vertex_count();
    let instance = Instance::new(graph, vec![output.k; vertex_count], vec![output.u; vertex_count]);
    if let Some(prefix) = &output.output {
        write_instance(&instance, prefix)?;
        info!(prefix = %prefix.display(), "instance written");
    }
    Ok(ExecutionSummary {
        command,
        instance,
        subsets,
        prefix: output.output,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The header lines are followed by one `LOW\tHIGH` line per edge and, for
/// Kneser graphs, one `VERTEX\tSUBSET` line per vertex.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use graphgen_cli::cli::{ExecutionSummary, render_summary};
/// use graphgen_core::{Graph, Instance};
///
/// let graph = Graph::from_edges(2, [(0, 1)]).expect("valid edges");
/// let summary = ExecutionSummary {
///     command: "demo",
///     instance: Instance::new(graph, vec![1, 1], vec![0, 0]),
///     subsets: None,
///     prefix: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer).expect("write to memory");
/// let text = String::from_utf8(buffer).expect("utf-8");
/// assert_eq!(text, "command: demo\nvertices: 2\nedges: 1\nk: [1, 1]\nu: [0, 0]\n0\t1\n");
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = &summary.instance.graph;
    writeln!(writer, "command: {}", summary.command)?;
    if let Some(prefix) = &summary.prefix {
        writeln!(writer, "prefix: {}", prefix.display())?;
    }
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    writeln!(writer, "k: {}", Literal::from(summary.instance.k.as_slice()))?;
    writeln!(writer, "u: {}", Literal::from(summary.instance.u.as_slice()))?;
    for (low, high) in graph.edges() {
        writeln!(writer, "{low}\t{high}")?;
    }
    for (vertex, subset) in summary.subsets.iter().flatten().enumerate() {
        let members: Vec<String> = subset.iter().map(ToString::to_string).collect();
        writeln!(writer, "{vertex}\t{{{}}}", members.join(", "))?;
    }
    Ok(())
}
