//! Command-line interface for generating and inspecting graph instances.
//!
//! Each generator command builds one graph, fills the `k` and `u` vectors
//! with a constant per vertex, and optionally writes the instance under an
//! output prefix. `inspect` reads a stored instance back.

mod commands;

pub use commands::{
    ArcArgError, CaterpillarCommand, CircularArcCommand, Cli, CliError, Command, ExecutionSummary,
    InspectCommand, KneserCommand, OutputArgs, RandomCaterpillarCommand, RandomCircularArcCommand,
    SeedArgs, parse_arc, render_summary, run_cli,
};

#[cfg(test)]
mod tests;
