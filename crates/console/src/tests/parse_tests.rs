use clap::Parser;

use crate::cmd::Commands;
use crate::output::OutputMode;
use crate::Opts;

fn parse(args: &[&str]) -> Opts {
    let mut full = vec!["ruledeck"];
    full.extend_from_slice(args);
    Opts::parse_from(full)
}

#[test]
fn parse_version() {
    let opts = parse(&["version"]);
    assert!(matches!(opts.cmd, Commands::Version));
}

#[test]
fn parse_json_flag() {
    let opts = parse(&["--json", "version"]);
    assert!(opts.json);
    assert_eq!(opts.output_mode(), OutputMode::Json);
}

#[test]
fn human_mode_is_the_default() {
    let opts = parse(&["version"]);
    assert!(!opts.json);
    assert_eq!(opts.output_mode(), OutputMode::Human);
}

#[test]
fn parse_server_flag() {
    let opts = parse(&["--server", "http://localhost:9090", "version"]);
    assert_eq!(opts.server.as_deref(), Some("http://localhost:9090"));
}

#[test]
fn parse_config_flag() {
    let opts = parse(&["--config", "/tmp/console.yml", "version"]);
    assert_eq!(opts.config.as_deref(), Some("/tmp/console.yml"));
}

#[test]
fn parse_rules_list() {
    let opts = parse(&["rules", "list"]);
    assert!(matches!(opts.cmd, Commands::Rules(_)));
}

#[test]
fn parse_rules_create() {
    let opts = parse(&[
        "rules",
        "create",
        "--id",
        "r1",
        "--condition",
        "temp > 40",
        "--action",
        "alert('hi')",
    ]);
    assert!(matches!(opts.cmd, Commands::Rules(_)));
}

#[test]
fn parse_rules_update_partial() {
    let opts = parse(&["rules", "update", "r1", "--condition", "temp > 50"]);
    assert!(matches!(opts.cmd, Commands::Rules(_)));
}

#[test]
fn parse_rules_delete_with_yes() {
    let opts = parse(&["rules", "delete", "r1", "--yes"]);
    assert!(matches!(opts.cmd, Commands::Rules(_)));
}

#[test]
fn parse_event_send() {
    let opts = parse(&["event", "send", "--data", r#"{"temp": 45}"#]);
    assert!(matches!(opts.cmd, Commands::Event(_)));
}

#[test]
fn parse_thresholds_show() {
    let opts = parse(&["thresholds", "show"]);
    assert!(matches!(opts.cmd, Commands::Thresholds(_)));
}

#[test]
fn parse_thresholds_set() {
    let opts = parse(&["thresholds", "set", "--cpu", "70", "--memory", "90"]);
    assert!(matches!(opts.cmd, Commands::Thresholds(_)));
}

#[test]
fn parse_watch_with_interval_and_count() {
    let opts = parse(&["watch", "--interval-ms", "250", "--count", "3"]);
    assert!(matches!(opts.cmd, Commands::Watch(_)));
}

#[test]
fn parse_combined_globals() {
    let opts = parse(&["--json", "--server", "http://engine:8080", "rules", "list"]);
    assert!(opts.json);
    assert_eq!(opts.server.as_deref(), Some("http://engine:8080"));
}
