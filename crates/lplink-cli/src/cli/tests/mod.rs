//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Option<CliCommand> {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_no_subcommand() {
    assert!(parse(&["lplink"]).is_none());
}

#[test]
fn cli_parse_run_defaults() {
    match parse(&["lplink", "run"]) {
        Some(CliCommand::Run(args)) => {
            assert!(args.base_dir.is_none());
            assert!(args.config.is_none());
            assert!(!args.dry_run);
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_all_flags() {
    match parse(&[
        "lplink",
        "run",
        "--base-dir",
        "/srv/lp",
        "--config",
        "lp.toml",
        "--dry-run",
    ]) {
        Some(CliCommand::Run(args)) => {
            assert_eq!(args.base_dir.as_deref(), Some(Path::new("/srv/lp")));
            assert_eq!(args.config.as_deref(), Some(Path::new("lp.toml")));
            assert!(args.dry_run);
        }
        _ => panic!("expected Run with flags"),
    }
}

#[test]
fn cli_parse_list() {
    match parse(&["lplink", "list"]) {
        Some(CliCommand::List { config }) => assert!(config.is_none()),
        _ => panic!("expected List"),
    }
    match parse(&["lplink", "list", "--config", "x.toml"]) {
        Some(CliCommand::List { config }) => {
            assert_eq!(config.as_deref(), Some(Path::new("x.toml")))
        }
        _ => panic!("expected List with --config"),
    }
}

#[test]
fn cli_parse_init_config() {
    match parse(&["lplink", "init-config", "/tmp/lplink.toml"]) {
        Some(CliCommand::InitConfig { path }) => {
            assert_eq!(path, Path::new("/tmp/lplink.toml"))
        }
        _ => panic!("expected InitConfig"),
    }
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["lplink", "run", "--force"]).is_err());
}

#[test]
fn init_config_refuses_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lplink.toml");
    super::commands::run_init_config(&path).unwrap();
    assert!(path.exists());
    assert!(super::commands::run_init_config(&path).is_err());
}
