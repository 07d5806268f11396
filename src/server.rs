//! HTTP surface for the dashboard.
//!
//! Serves the embedded page, a small JSON API for the charts and the detail
//! region, and the CSV download. All handlers are cheap synchronous
//! computations over shared read-only state; the selection arrives with
//! each request and is never stored server-side, so concurrent users cannot
//! observe each other's choice.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::aggregate;
use crate::charts::{self, ChartSpec};
use crate::table::Table;
use crate::view::{self, SelectionView};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only state shared by all handlers: the table plus everything
/// derived once at startup.
#[derive(Clone)]
pub struct DashboardState {
    inner: Arc<Inner>,
}

struct Inner {
    table: Table,
    teams: Vec<String>,
    totals_chart: ChartSpec,
    distribution_chart: ChartSpec,
}

impl DashboardState {
    /// Builds the shared state, computing both aggregates and their charts.
    pub fn new(table: Table) -> Self {
        let totals = aggregate::aggregate_totals(&table);
        let counts = aggregate::aggregate_counts(&table);
        let inner = Inner {
            teams: table.teams().iter().map(|t| t.to_string()).collect(),
            totals_chart: charts::team_totals_chart(&totals),
            distribution_chart: charts::team_distribution_chart(&counts),
            table,
        };
        DashboardState {
            inner: Arc::new(inner),
        }
    }

    pub fn table(&self) -> &Table {
        &self.inner.table
    }

    pub fn teams(&self) -> &[String] {
        &self.inner.teams
    }
}

pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/summary", get(summary))
        .route("/api/team", get(team_detail))
        .route("/api/export", get(export))
        .with_state(state)
}

/// Binds the listener and serves the dashboard until the process exits.
pub async fn serve(state: DashboardState, addr: SocketAddr) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    info!("dashboard listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct TeamQuery {
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Summary {
    teams: Vec<String>,
    totals_chart: ChartSpec,
    distribution_chart: ChartSpec,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn summary(State(state): State<DashboardState>) -> Json<Summary> {
    Json(Summary {
        teams: state.inner.teams.clone(),
        totals_chart: state.inner.totals_chart.clone(),
        distribution_chart: state.inner.distribution_chart.clone(),
    })
}

async fn team_detail(
    State(state): State<DashboardState>,
    Query(query): Query<TeamQuery>,
) -> Json<SelectionView> {
    debug!(team = ?query.name, "selection change");
    Json(view::selection_view(state.table(), query.name.as_deref()))
}

async fn export(State(state): State<DashboardState>, Query(query): Query<TeamQuery>) -> Response {
    match view::export_team_csv(state.table(), query.name.as_deref()) {
        Ok(Some(export)) => {
            debug!(filename = %export.filename, "export requested");
            let headers = [
                (header::CONTENT_TYPE, "text/csv".to_owned()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export.filename),
                ),
            ];
            (headers, export.bytes).into_response()
        }
        // No selection: the click produces nothing, and no error.
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
