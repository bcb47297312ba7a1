//! Unit tests for argument parsing and command execution.

use super::commands::{run_inspect, run_kneser, run_random_caterpillar};
use super::{
    ArcArgError, CaterpillarCommand, Cli, CliError, Command, InspectCommand, KneserCommand,
    OutputArgs, RandomCaterpillarCommand, SeedArgs, parse_arc, render_summary, run_cli,
};

use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use graphgen_core::{GeneratorError, K_SUFFIX, instance_path, read_int_vector};
use graphgen_test_support::tracing::capture;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn workdir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("graphgen").chain(args.iter().copied()))
        .expect("arguments parse")
}

fn random_caterpillar(seed: Option<u64>, min_legs: usize, max_legs: usize) -> RandomCaterpillarCommand {
    RandomCaterpillarCommand {
        spine_length: 8,
        min_legs,
        max_legs,
        seed: SeedArgs { seed },
        output: OutputArgs::default(),
    }
}

#[rstest]
fn caterpillar_legs_are_comma_separated() {
    let cli = parse(&["caterpillar", "--legs", "1,0,2", "--k", "-3"]);
    let Command::Caterpillar(command) = cli.command else {
        panic!("expected caterpillar command");
    };
    assert_eq!(command.legs, vec![1, 0, 2]);
    assert_eq!(command.output.k, -3);
    assert_eq!(command.output.u, 0);
}

#[rstest]
#[case::negative_legs(&["caterpillar", "--legs", "1,-1"])]
#[case::missing_legs(&["caterpillar"])]
#[case::degenerate_arc(&["circular-arc", "--arc", "3:3"])]
#[case::arc_out_of_range(&["circular-arc", "--arc", "1:12"])]
#[case::arc_without_separator(&["circular-arc", "--arc", "4"])]
#[case::missing_r(&["kneser", "--n", "5"])]
fn invalid_arguments_are_rejected_by_the_parser(#[case] args: &[&str]) {
    let result = Cli::try_parse_from(std::iter::once("graphgen").chain(args.iter().copied()));
    let err = result.expect_err("arguments must be rejected");
    assert_ne!(err.kind(), ErrorKind::DisplayHelp);
}

#[rstest]
fn arcs_are_parsed_in_order() {
    let cli = parse(&["circular-arc", "--arc", "1:3", "--arc", "11.5:0.5"]);
    let Command::CircularArc(command) = cli.command else {
        panic!("expected circular-arc command");
    };
    let endpoints: Vec<_> = command.arcs.iter().map(|arc| (arc.start(), arc.end())).collect();
    assert_eq!(endpoints, vec![(1.0, 3.0), (11.5, 0.5)]);
}

#[rstest]
fn parse_arc_reports_bad_coordinates() {
    let err = parse_arc("one:2").expect_err("not a number");
    assert!(matches!(err, ArcArgError::InvalidNumber { ref raw, .. } if raw == "one"));
    let err = parse_arc("2:2").expect_err("degenerate");
    assert!(matches!(err, ArcArgError::Invalid(GeneratorError::DegenerateArc { .. })));
}

#[rstest]
fn caterpillar_summary_fills_vectors_per_vertex() {
    let summary = run_cli(parse(&["caterpillar", "--legs", "1,0,2", "--u", "4"]))
        .expect("command succeeds");
    assert_eq!(summary.command, "caterpillar");
    assert_eq!(summary.instance.graph.vertex_count(), 6);
    assert_eq!(summary.instance.graph.edge_count(), 5);
    assert_eq!(summary.instance.k, vec![1; 6]);
    assert_eq!(summary.instance.u, vec![4; 6]);
    assert!(summary.prefix.is_none());
}

#[rstest]
fn output_prefix_writes_an_instance_that_inspect_reads_back(workdir: TempDir) {
    let prefix = workdir.path().join("petersen");
    let prefix_arg = prefix.to_str().expect("utf-8 temp path");
    let generated = run_cli(parse(&[
        "kneser", "--n", "5", "--r", "2", "--output", prefix_arg, "--k", "2",
    ]))
    .expect("generation succeeds");

    assert_eq!(
        read_int_vector(&instance_path(&prefix, K_SUFFIX)).expect("k file"),
        vec![2; 10]
    );

    let inspected = run_inspect(InspectCommand {
        prefix: prefix.clone(),
    })
    .expect("inspection succeeds");
    assert_eq!(inspected.instance, generated.instance);
    assert_eq!(inspected.prefix, Some(prefix));
}

#[rstest]
fn inspect_reports_missing_instances(workdir: TempDir) {
    let err = run_inspect(InspectCommand {
        prefix: workdir.path().join("absent"),
    })
    .expect_err("nothing to read");
    assert!(matches!(err, CliError::Instance(_)));
    assert_eq!(err.code(), "INSTANCE_IO");
}

#[rstest]
fn kneser_summary_lists_subsets() {
    let summary = run_kneser(KneserCommand {
        n: 4,
        r: 2,
        output: OutputArgs::default(),
    })
    .expect("valid parameters");
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer).expect("write to memory");
    let text = String::from_utf8(buffer).expect("utf-8");
    assert!(text.starts_with("command: kneser\nvertices: 6\nedges: 3\n"), "{text}");
    assert!(text.contains("0\t5\n"));
    assert!(text.ends_with("4\t{1, 3}\n5\t{2, 3}\n"), "{text}");
}

#[rstest]
fn kneser_rejects_oversized_subsets() {
    let err = run_cli(parse(&["kneser", "--n", "2", "--r", "3"])).expect_err("r > n");
    assert_eq!(err.code(), "GENERATOR_SUBSET_LARGER_THAN_GROUND_SET");
}

#[rstest]
fn seeded_random_caterpillars_are_reproducible() {
    let first = run_random_caterpillar(random_caterpillar(Some(42), 0, 3)).expect("valid");
    let second = run_random_caterpillar(random_caterpillar(Some(42), 0, 3)).expect("valid");
    assert_eq!(first.instance, second.instance);
    let vertices = first.instance.graph.vertex_count();
    assert!((8..=8 + 8 * 3).contains(&vertices));
}

#[rstest]
fn inverted_leg_range_maps_to_generator_error() {
    let err = run_random_caterpillar(random_caterpillar(None, 5, 1)).expect_err("reversed range");
    assert!(matches!(
        err,
        CliError::Generator(GeneratorError::LegRangeInverted { .. })
    ));
    assert_eq!(err.code(), "GENERATOR_LEG_RANGE_INVERTED");
}

#[rstest]
fn invalid_arc_length_range_is_reported() {
    let err = run_cli(parse(&[
        "random-circular-arc",
        "--arcs",
        "4",
        "--min-length",
        "3",
        "--max-length",
        "12",
    ]))
    .expect_err("max length reaches the circumference");
    assert_eq!(err.code(), "GENERATOR_INVALID_ARC_LENGTH_RANGE");
}

#[rstest]
fn run_cli_records_command_and_seed() {
    let cli = parse(&[
        "random-circular-arc",
        "--arcs",
        "6",
        "--min-length",
        "1",
        "--max-length",
        "2",
        "--seed",
        "9",
    ]);
    let (summary, layer) = capture(|| run_cli(cli));
    assert_eq!(summary.expect("command succeeds").instance.graph.vertex_count(), 6);

    let run = layer.span("cli.run").expect("cli.run span");
    assert_eq!(run.field("command"), Some("random-circular-arc"));
    let random = layer
        .span("cli.random_circular_arc")
        .expect("random span");
    assert_eq!(random.field("seed"), Some("9"));
    assert!(layer.span("generator.random_circular_arc").is_some());
    assert!(layer.messages().iter().any(|message| message == "command completed"));
}

#[rstest]
fn explicit_caterpillar_command_runs_without_the_parser() {
    let cli = Cli {
        command: Command::Caterpillar(CaterpillarCommand {
            legs: vec![0, 0],
            output: OutputArgs {
                output: None::<PathBuf>,
                k: 7,
                u: -7,
            },
        }),
    };
    let summary = run_cli(cli).expect("command succeeds");
    assert_eq!(summary.instance.graph.edges(), vec![(0, 1)]);
    assert_eq!(summary.instance.u, vec![-7, -7]);
}
