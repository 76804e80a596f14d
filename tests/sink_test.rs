use joblog::test_support::MemorySink;
use joblog::{JsonLinesSink, LogContext, Severity, Stream, WriterSink, kvs};
use std::fs;
use tracing_test::traced_test;

#[test]
fn test_writer_sink_writes_one_line_per_event() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let ctx = LogContext::new();
    ctx.initialize(WriterSink::new(file.reopen().unwrap()));

    let logger = ctx.logger("uploader").unwrap();
    logger.info("started");
    logger.warn_kv("slow", kvs! { "elapsed_ms" => 900 });

    let content = fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("] uploader: [INFO] started"));
    assert!(lines[1].contains("] uploader: [WARNING] slow elapsed_ms=900"));
}

#[test]
fn test_init_writer_wraps_writer_in_line_sink() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let ctx = LogContext::new();
    ctx.initialize_writer(file.reopen().unwrap());

    ctx.logger("svc").unwrap().error("boom");

    let content = fs::read_to_string(file.path()).unwrap();
    assert!(content.contains("svc: [ERROR] boom"));
}

#[test]
fn test_json_lines_sink_shape() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let sink = JsonLinesSink::open(file.path()).unwrap();
    let stream = Stream::with_sink(sink);

    let job = stream.job("encoder");
    job.event("[INFO] done");
    job.event_kv("[ERROR] failed", kvs! { "code" => 7, "fatal" => true });

    let content = fs::read_to_string(file.path()).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["job"], "encoder");
    assert_eq!(lines[0]["message"], "[INFO] done");
    assert!(lines[0].get("kvs").is_none());
    assert_eq!(lines[1]["kvs"]["code"], 7);
    assert_eq!(lines[1]["kvs"]["fatal"], true);
    assert!(lines[1]["timestamp"].is_string());
}

#[test]
fn test_multi_sink_stream_fans_out() {
    let text = MemorySink::new();
    let audit = MemorySink::new();
    let stream = Stream::new();
    stream.add_sink(text.clone());
    stream.add_sink(audit.clone());

    let ctx = LogContext::new();
    ctx.initialize_stream(stream);
    ctx.set_level(Severity::Info);
    ctx.logger("fanout").unwrap().info("to both");

    assert_eq!(text.messages(), vec!["[INFO] to both"]);
    assert_eq!(audit.messages(), vec!["[INFO] to both"]);
}

#[test]
#[traced_test]
fn test_sink_failure_is_logged_not_raised() {
    let sink = MemorySink::new();
    sink.set_should_fail(true);

    let ctx = LogContext::new();
    ctx.initialize(sink.clone());
    let logger = ctx.logger("doomed").unwrap();

    // Must not panic or propagate anything to the caller.
    logger.error("boom");

    assert!(sink.is_empty());
    let stats = ctx.stream().unwrap().stats();
    assert_eq!(stats.events, 1);
    assert_eq!(stats.sink_errors, 1);
    assert!(logs_contain("event sink failed"));
}
