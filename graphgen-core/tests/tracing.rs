mod common;

use graphgen_core::{
    Instance, generate_caterpillar, generate_circular_arc, generate_kneser, read_instance,
    write_instance,
};
use graphgen_test_support::tracing::capture;
use rstest::rstest;
use tracing::Level;

use common::arc;

#[rstest]
fn caterpillar_span_records_sizes() {
    let (graph, layer) = capture(|| generate_caterpillar(&[2, 0, 1]));
    graph.expect("caterpillar builds");

    let span = layer.span("generator.caterpillar").expect("span recorded");
    assert_eq!(span.field("spine_length"), Some("3"));
    assert_eq!(span.field("leg_total"), Some("3"));

    let completion = layer
        .events()
        .into_iter()
        .find(|event| event.field("message") == Some("caterpillar generated"))
        .expect("completion event");
    assert_eq!(completion.level, Level::DEBUG);
    assert_eq!(completion.field("vertices"), Some("6"));
    assert_eq!(completion.field("edges"), Some("5"));
}

#[rstest]
fn kneser_span_records_parameters() {
    let (kneser, layer) = capture(|| generate_kneser(5, 2));
    kneser.expect("valid parameters");

    let span = layer.span("generator.kneser").expect("span recorded");
    assert_eq!(span.field("n"), Some("5"));
    assert_eq!(span.field("r"), Some("2"));
    assert!(layer.messages().iter().any(|message| message == "kneser graph generated"));
}

#[rstest]
fn failed_generation_emits_an_error_event() {
    let (result, layer) = capture(|| generate_kneser(2, 5));
    result.expect_err("r > n must fail");

    assert!(layer.span("generator.kneser").is_some());
    assert!(
        layer.events().iter().any(|event| event.level == Level::ERROR),
        "instrumented errors are reported"
    );
}

#[rstest]
fn circular_arc_span_counts_arcs() {
    let arcs = [arc(1.0, 3.0), arc(2.0, 5.0)];
    let (graph, layer) = capture(|| generate_circular_arc(&arcs));
    graph.expect("graph builds");

    let span = layer.span("generator.circular_arc").expect("span recorded");
    assert_eq!(span.field("arcs"), Some("2"));
}

#[rstest]
fn codec_spans_wrap_reads_and_writes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let prefix = dir.path().join("traced");
    let instance = Instance::new(generate_caterpillar(&[1]).expect("builds"), vec![1], vec![2]);

    let (written, layer) = capture(|| write_instance(&instance, &prefix));
    written.expect("write succeeds");
    let span = layer.span("codec.write_instance").expect("write span");
    assert_eq!(span.field("vertices"), Some("2"));
    assert_eq!(span.field("edges"), Some("1"));

    let (read, layer) = capture(|| read_instance(&prefix));
    read.expect("read succeeds");
    let span = layer.span("codec.read_instance").expect("read span");
    assert_eq!(span.field("prefix"), Some(prefix.display().to_string().as_str()));
}
