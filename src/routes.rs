use crate::dto::{
    DataStats, EndpointDirectory, HealthReport, RawDataDump, SaveAcknowledgement, SaveTodos,
    iso_timestamp,
};
use crate::entity::{StoreTotals, TodoItem};
use crate::persistence::TodoStore;
use crate::report;
use crate::routing_utils::{ApiFailure, Json, StoreErrorResponse};
use axum::Router;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI document covering the JSON API surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SparkTask Pro API",
        description = "A per-user to-do list API backed by a single JSON file"
    ),
    paths(get_todos, save_todos, raw_data, health),
    components(
        schemas(
            TodoItem,
            SaveTodos,
            SaveAcknowledgement,
            RawDataDump,
            HealthReport,
            DataStats,
            EndpointDirectory
        ),
        responses(ApiFailure)
    )
)]
pub struct ApiDoc;

/// Constructs the route on the API that renders the swagger UI and returns the
/// OpenAPI schema.
pub fn build_documentation() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

/// Builds the service's router around the given store implementation.
pub fn todo_routes<Store: TodoStore>(store: Arc<Store>) -> Router {
    Router::new()
        .route(
            "/api/todos/:username",
            get(get_todos::<Store>).post(save_todos::<Store>),
        )
        .route("/api/raw-data", get(raw_data::<Store>))
        .route("/health", get(health::<Store>))
        .route("/raw-data", get(report_page::<Store>))
        .with_state(store)
}

/// Retrieves a user's current to-do list
#[utoipa::path(
    get,
    path = "/api/todos/{username}",
    params(("username" = String, Path, description = "Owner of the requested list")),
    responses(
        (status = 200, description = "The user's list, empty if the user is unknown", body = Vec<TodoItem>),
    )
)]
async fn get_todos<Store: TodoStore>(
    State(store): State<Arc<Store>>,
    Path(username): Path<String>,
) -> Json<Vec<TodoItem>> {
    let mut document = store.read_all().await;
    Json(document.remove(&username).unwrap_or_default())
}

/// Replaces a user's to-do list wholesale
#[utoipa::path(
    post,
    path = "/api/todos/{username}",
    params(("username" = String, Path, description = "Owner of the list being replaced")),
    request_body = SaveTodos,
    responses(
        (status = 200, description = "The list was saved", body = SaveAcknowledgement),
        (status = 500, response = ApiFailure),
    )
)]
async fn save_todos<Store: TodoStore>(
    State(store): State<Arc<Store>>,
    Path(username): Path<String>,
    Json(submission): Json<SaveTodos>,
) -> Result<Json<SaveAcknowledgement>, StoreErrorResponse> {
    let item_count = submission.todos.len();
    store
        .write_user(&username, submission.todos)
        .await
        .map_err(|write_err| {
            error!(%username, error = %write_err, "failed to persist todo list");
            StoreErrorResponse::from(write_err)
        })?;

    info!(%username, item_count, "todo list replaced");
    Ok(Json(SaveAcknowledgement {
        success: true,
        message: "Todos saved successfully".to_owned(),
    }))
}

/// Dumps the entire store document with aggregate counts
#[utoipa::path(
    get,
    path = "/api/raw-data",
    responses(
        (status = 200, description = "Every user's list plus totals", body = RawDataDump),
    )
)]
async fn raw_data<Store: TodoStore>(State(store): State<Arc<Store>>) -> Json<RawDataDump> {
    let document = store.read_all().await;
    let totals = StoreTotals::from_document(&document);

    Json(RawDataDump {
        success: true,
        timestamp: iso_timestamp(),
        total_users: totals.total_users,
        total_todos: totals.total_todos,
        data: document,
    })
}

/// Reports liveness along with store statistics and a route directory
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "The service is up", body = HealthReport),
    )
)]
async fn health<Store: TodoStore>(State(store): State<Arc<Store>>) -> Json<HealthReport> {
    let document = store.read_all().await;
    let totals = StoreTotals::from_document(&document);

    Json(HealthReport {
        status: "OK".to_owned(),
        message: "SparkTask Pro Server is running!".to_owned(),
        timestamp: iso_timestamp(),
        data_stats: DataStats {
            total_users: totals.total_users,
            total_todos: totals.total_todos,
        },
        endpoints: EndpointDirectory::default(),
    })
}

/// The human-readable report page over the whole store
async fn report_page<Store: TodoStore>(State(store): State<Arc<Store>>) -> Html<String> {
    let document = store.read_all().await;
    Html(report::render_report(&document, &iso_timestamp()))
}
