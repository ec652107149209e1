use serde_json::Value;

use crate::client::ApiClient;
use crate::error::OctofitResult;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::{Activity, LeaderboardEntry, Team, User, Workout};
use crate::views::resource::Resource;
use crate::views::route::ViewKind;
use crate::views::state::ViewState;
use crate::views::table::TableModel;

/// Turn the outcome of a collection fetch into the view's settled state.
/// Every failure cause collapses into one message.
pub fn settle_collection<R: Resource>(outcome: OctofitResult<Vec<Value>>) -> ViewState<Vec<R>> {
    let spec = R::KIND.spec();

    match outcome {
        Ok(values) => {
            let mut records: Vec<R> = values.into_iter().map(R::from_value).collect();
            R::arrange(&mut records);

            log_debug(&format!(
                "Processed {} data: {}",
                spec.command,
                serde_json::to_string(&records).unwrap_or_default()
            ));
            ViewState::Loaded(records)
        }
        Err(e) => {
            log_error(&format!("Error fetching {}: {}", spec.command, e));
            ViewState::Failed(e.to_string())
        }
    }
}

/// Run the fetch-normalize lifecycle for one resource.
pub async fn load_collection<R: Resource>(client: &ApiClient) -> ViewState<Vec<R>> {
    let spec = R::KIND.spec();
    log_info(&format!(
        "Fetching {} from: {}",
        spec.command,
        client.endpoint_url(spec.path)
    ));

    settle_collection(client.fetch_collection(spec.path).await)
}

async fn load_table<R: Resource>(client: &ApiClient) -> ViewState<TableModel> {
    load_collection::<R>(client)
        .await
        .map(|records| TableModel::from_records(&records))
}

/// Mount a view by kind and produce its render model.
pub async fn load_view(client: &ApiClient, kind: ViewKind) -> ViewState<TableModel> {
    match kind {
        ViewKind::Users => load_table::<User>(client).await,
        ViewKind::Teams => load_table::<Team>(client).await,
        ViewKind::Activities => load_table::<Activity>(client).await,
        ViewKind::Leaderboard => load_table::<LeaderboardEntry>(client).await,
        ViewKind::Workouts => load_table::<Workout>(client).await,
    }
}
