use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};

use octofit_cli::cli_context::CliContext;
use octofit_cli::commands::{handle_config, handle_home, handle_list, handle_routes, handle_view};
use octofit_cli::constants::OUTPUT_FORMATS;
use octofit_cli::error::{OctofitError, OctofitResult};
use octofit_cli::interactive;
use octofit_cli::logging::{init_logging, log_error, log_info};
use octofit_cli::views::{Route, ViewKind};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: full, table, cards, json")
        .value_parser(OUTPUT_FORMATS)
}

fn build_cli() -> Command {
    let mut app = Command::new("octofit")
        .about("OctoFit Tracker - browse users, teams, activities, workouts and the leaderboard")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("Backend base URL (overrides environment and config)")
                .global(true)
        )
        .subcommand(
            Command::new("home")
                .about("Show the landing page")
        )
        .subcommand(
            Command::new("routes")
                .about("List the navigation routes")
        );

    for kind in ViewKind::ALL {
        let spec = kind.spec();
        app = app.subcommand(
            Command::new(spec.command)
                .about(spec.subtitle)
                .arg(format_arg())
        );
    }

    app.subcommand(
            Command::new("view")
                .about("Render the view mounted at a route")
                .arg(
                    Arg::new("route")
                        .value_name("ROUTE")
                        .help("Route path (e.g., /leaderboard)")
                        .required(true)
                        .index(1)
                )
                .arg(format_arg())
        )
        .subcommand(
            Command::new("dashboard")
                .about("Open the interactive dashboard")
                .arg(
                    Arg::new("route")
                        .long("route")
                        .short('r')
                        .value_name("ROUTE")
                        .help("Route to open first")
                        .default_value("/")
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show or change saved settings")
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current settings")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("set-base-url")
                        .long("set-base-url")
                        .value_name("URL")
                        .help("Save a backend base URL")
                        .conflicts_with("clear-base-url")
                )
                .arg(
                    Arg::new("clear-base-url")
                        .long("clear-base-url")
                        .help("Forget the saved backend base URL")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("default-format")
                        .long("default-format")
                        .value_name("FORMAT")
                        .help("Save the default output format")
                        .value_parser(OUTPUT_FORMATS)
                )
        )
}

async fn dispatch(matches: &ArgMatches) -> OctofitResult<()> {
    let base_url = matches.get_one::<String>("base-url").map(String::as_str);

    match matches.subcommand() {
        Some(("home", _)) => handle_home(),
        Some(("routes", _)) => handle_routes(),
        Some(("view", sub_matches)) => {
            let mut context = CliContext::load(base_url);
            handle_view(&mut context, sub_matches).await
        }
        Some(("dashboard", sub_matches)) => {
            let route = sub_matches
                .get_one::<String>("route")
                .map(|path| Route::parse(path))
                .transpose()?
                .unwrap_or(Route::Home);
            let context = CliContext::load(base_url);
            interactive::run(context, route).await
        }
        Some(("config", sub_matches)) => {
            let mut context = CliContext::load(base_url);
            handle_config(&mut context, sub_matches)
        }
        Some((name, sub_matches)) => match ViewKind::from_command(name) {
            Some(kind) => {
                let mut context = CliContext::load(base_url);
                handle_list(&mut context, kind, sub_matches).await
            }
            None => Err(OctofitError::InvalidInput(format!(
                "unknown command '{}'. Use 'octofit --help' for available commands.",
                name
            ))),
        },
        None => Err(OctofitError::InvalidInput(
            "no command given. Use 'octofit --help' for available commands.".to_string(),
        )),
    }
}

#[tokio::main]
async fn main() {
    // Best-effort: without a log file the records are dropped
    let _ = init_logging();

    let matches = build_cli().get_matches();

    if let Err(e) = dispatch(&matches).await {
        log_error(&format!("Command failed: {}", e));
        match e {
            OctofitError::ViewFailed(_) => {}
            _ => eprintln!("Error: {}", e),
        }
        process::exit(1);
    }

    log_info("Command finished");
}
