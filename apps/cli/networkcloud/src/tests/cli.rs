use crate::cli::{Cli, Command, GroupsCommand, LinkCommand, ServiceCommand, WaitArgs};

use std::path::PathBuf;
use std::time::Duration;

use clap::{CommandFactory, Parser};

#[test]
fn given_cli_definition_when_debug_asserted_then_valid() {
    Cli::command().debug_assert();
}

#[test]
fn given_no_flags_when_parsing_status_then_defaults_apply() {
    let cli = Cli::try_parse_from(["networkcloud", "status"]).unwrap();

    assert_eq!(cli.command, Command::Status);
    assert!(cli.timeout.is_none());
    assert!(cli.data_root.is_none());
    assert!(!cli.verbose);
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_accepted() {
    let cli = Cli::try_parse_from([
        "networkcloud",
        "network",
        "--timeout",
        "1500ms",
        "--data-root",
        "/tmp/root",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.command, Command::Network);
    assert_eq!(cli.timeout, Some(Duration::from_millis(1500)));
    assert_eq!(cli.data_root, Some(PathBuf::from("/tmp/root")));
    assert!(cli.verbose);
}

#[test]
fn given_invalid_timeout_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["networkcloud", "status", "--timeout", "soon"]);

    assert!(result.is_err());
}

#[test]
fn given_link_subcommands_when_parsing_then_mapped() {
    let start = Cli::try_parse_from(["networkcloud", "link", "start", "--wait"]).unwrap();
    let wait = Cli::try_parse_from(["networkcloud", "link", "wait", "--interval", "2"]).unwrap();

    assert_eq!(start.command, Command::Link(LinkCommand::Start { wait: true }));
    assert_eq!(
        wait.command,
        Command::Link(LinkCommand::Wait(WaitArgs {
            interval: 2,
            expires_in: 900
        }))
    );
}

#[test]
fn given_service_and_groups_subcommands_when_parsing_then_mapped() {
    let stop = Cli::try_parse_from(["networkcloud", "service", "stop"]).unwrap();
    let set = Cli::try_parse_from([
        "networkcloud",
        "groups",
        "set",
        "AA:BB:CC:DD:EE:FF",
        "Office",
    ])
    .unwrap();

    assert_eq!(stop.command, Command::Service(ServiceCommand::Stop));
    assert_eq!(
        set.command,
        Command::Groups(GroupsCommand::Set {
            adapter: String::from("AA:BB:CC:DD:EE:FF"),
            label: String::from("Office"),
        })
    );
}
