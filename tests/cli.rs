use clap::Parser;
use profman::cli::{Cli, Command};
use profman::gateway::Request;

#[test]
fn parses_start_with_globals() {
    let cli = Cli::try_parse_from(["profman", "--root", "/tmp/p", "-vv", "start"])
        .expect("cli parse should work");
    assert_eq!(cli.root.as_deref(), Some(std::path::Path::new("/tmp/p")));
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.command, Command::Start));
}

#[test]
fn parses_create_without_name() {
    let cli = Cli::try_parse_from(["profman", "create-profile"]).expect("cli parse should work");
    match cli.command {
        Command::CreateProfile(args) => assert!(args.name.is_none()),
        _ => panic!("expected create-profile command"),
    }
}

#[test]
fn parses_rename() {
    let cli = Cli::try_parse_from(["profman", "--json", "rename-profile", "Work"])
        .expect("cli parse should work");
    assert!(cli.json);
    match cli.command {
        Command::RenameProfile(args) => assert_eq!(args.name, "Work"),
        _ => panic!("expected rename-profile command"),
    }
}

#[test]
fn switch_requires_id() {
    assert!(Cli::try_parse_from(["profman", "switch-profile"]).is_err());
}

#[test]
fn maps_commands_to_requests() {
    let cli = Cli::try_parse_from(["profman", "switch-profile", "Work"]).expect("cli parse");
    assert_eq!(
        cli.command.into_request().expect("request"),
        Request::SwitchProfile {
            id: "Work".to_string()
        }
    );

    let cli = Cli::try_parse_from(["profman", "request", "create-profile", "Home"])
        .expect("cli parse");
    assert_eq!(
        cli.command.into_request().expect("request"),
        Request::CreateProfile {
            name: Some("Home".to_string())
        }
    );
}

#[test]
fn unknown_named_request_is_rejected() {
    let cli = Cli::try_parse_from(["profman", "request", "format-disk"]).expect("cli parse");
    assert!(cli.command.into_request().is_err());
}
