use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::client::ApiClient;
use crate::constants::DEFAULT_FORMAT;
use crate::error::{OctofitError, OctofitResult};
use crate::formatting::render::OutputFormat;
use crate::formatting::{render_json, render_view};
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::views::{load_collection, Resource, Route, TableModel, ViewKind, ViewState};

use super::home::handle_home;

fn output_format(context: &CliContext, matches: &ArgMatches) -> OctofitResult<OutputFormat> {
    let value = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .or_else(|| context.config().output_format())
        .unwrap_or(DEFAULT_FORMAT);
    OutputFormat::parse(value)
}

/// Mount one view, print it in the requested format and report whether it
/// settled in its error state.
async fn show<R: Resource>(client: &ApiClient, format: OutputFormat) -> OctofitResult<()> {
    let state = load_collection::<R>(client).await;

    let output = match format {
        OutputFormat::Json => format!("{}\n", render_json(&state)),
        _ => {
            let model = state.as_ref().map(|records| TableModel::from_records(records));
            render_view(&model, R::KIND, format)
        }
    };
    print!("{}", output);

    match state {
        ViewState::Failed(message) => Err(OctofitError::ViewFailed(message)),
        _ => Ok(()),
    }
}

pub async fn handle_list(
    context: &mut CliContext,
    kind: ViewKind,
    matches: &ArgMatches,
) -> OctofitResult<()> {
    let format = output_format(context, matches)?;
    let client = context.client()?;

    match kind {
        ViewKind::Users => show::<User>(&client, format).await,
        ViewKind::Teams => show::<Team>(&client, format).await,
        ViewKind::Activities => show::<Activity>(&client, format).await,
        ViewKind::Leaderboard => show::<LeaderboardEntry>(&client, format).await,
        ViewKind::Workouts => show::<Workout>(&client, format).await,
    }
}

pub async fn handle_view(context: &mut CliContext, matches: &ArgMatches) -> OctofitResult<()> {
    let path = matches
        .get_one::<String>("route")
        .ok_or_else(|| OctofitError::InvalidInput("a route is required".to_string()))?;

    match Route::parse(path)? {
        Route::Home => handle_home(),
        Route::View(kind) => handle_list(context, kind, matches).await,
    }
}
