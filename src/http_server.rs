use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde::Deserialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info};

use crate::{
    auth::{AccessDecision, GateTarget},
    error::Result,
    mock::MockServer,
    responses::{DeletedResponse, RecordResponse, ZoneResponse},
};

/// Root collection endpoint guarded by the access gate
pub const ZONES_ROOT: &str = "/zones";

/// HTTP front end for the mock zone API
pub struct HttpServer {
    mock: MockServer,
    bind_addr: SocketAddr,
}

impl HttpServer {
    pub fn new(mock: MockServer, bind_addr: SocketAddr) -> Self {
        Self { mock, bind_addr }
    }

    /// The fully wired router, for serving or for driving directly in tests
    pub fn router(&self) -> Router {
        build_router(self.mock.clone())
    }

    /// Bind the configured address and serve until ctrl-c
    pub async fn start(self) -> Result<()> {
        let listener = TcpListener::bind(self.bind_addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until ctrl-c
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        info!(
            "Mock PointDNS server listening on http://{}",
            listener.local_addr()?
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Build the zone API router around a shared mock
pub fn build_router(mock: MockServer) -> Router {
    Router::new()
        .route(ZONES_ROOT, get(list_zones))
        .route("/zones/", get(list_zones))
        .route(
            "/zones/{zone_id}",
            get(get_zone).put(update_zone).delete(delete_zone),
        )
        .route("/zones/{zone_id}/records", get(list_records))
        .route("/zones/{zone_id}/records/{record_id}", put(update_record))
        .route_layer(middleware::from_fn_with_state(
            mock.clone(),
            require_access,
        ))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(mock)
}

/// Run the access gate in front of every zone route
async fn require_access(State(mock): State<MockServer>, request: Request, next: Next) -> Response {
    let target = GateTarget::classify(request.uri().path(), ZONES_ROOT);

    let decision = match request.headers().get(header::AUTHORIZATION) {
        None => mock.authorize(None, target),
        Some(value) => match value.to_str() {
            Ok(value) => mock.authorize(Some(value), target),
            Err(_) => {
                debug!("Authorization header is not visible ASCII");
                AccessDecision::Forbidden
            }
        },
    };

    match decision {
        AccessDecision::Authorized => next.run(request).await,
        AccessDecision::Forbidden => (StatusCode::FORBIDDEN, "Access denied").into_response(),
        AccessDecision::NotFound => StatusCode::NOT_FOUND.into_response(),
        AccessDecision::RedirectToSignIn(location) => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
    }
}

/// Errors a handler can answer with
#[derive(Debug)]
enum ApiError {
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Path ids are plain decimal digits; anything else is an unknown resource
fn parse_id(raw: &str) -> ApiResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    raw.parse().map_err(|_| ApiError::NotFound)
}

#[derive(Debug, Deserialize)]
struct ZoneUpdateRequest {
    zone: ZoneGroupUpdate,
}

#[derive(Debug, Deserialize)]
struct ZoneGroupUpdate {
    group: String,
}

#[derive(Debug, Deserialize)]
struct RecordUpdateRequest {
    zone_record: RecordDataUpdate,
}

#[derive(Debug, Deserialize)]
struct RecordDataUpdate {
    data: String,
}

async fn list_zones(State(mock): State<MockServer>) -> Json<Vec<ZoneResponse>> {
    Json(mock.get_zones().iter().map(ZoneResponse::from).collect())
}

async fn get_zone(
    State(mock): State<MockServer>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<ZoneResponse>> {
    let zone = mock.get_zone(parse_id(&zone_id)?).ok_or(ApiError::NotFound)?;
    Ok(Json(ZoneResponse::from(&zone)))
}

async fn delete_zone(
    State(mock): State<MockServer>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    mock.take_zone(parse_id(&zone_id)?)
        .ok_or(ApiError::NotFound)?;
    Ok(Json(DeletedResponse::ok()))
}

async fn update_zone(
    State(mock): State<MockServer>,
    Path(zone_id): Path<String>,
    Json(body): Json<ZoneUpdateRequest>,
) -> ApiResult<(StatusCode, Json<ZoneResponse>)> {
    let zone = mock
        .update_zone_group(parse_id(&zone_id)?, &body.zone.group)
        .ok_or(ApiError::NotFound)?;
    Ok((StatusCode::ACCEPTED, Json(ZoneResponse::from(&zone))))
}

async fn list_records(
    State(mock): State<MockServer>,
    Path(zone_id): Path<String>,
) -> ApiResult<Json<Vec<RecordResponse>>> {
    let zone = mock.get_zone(parse_id(&zone_id)?).ok_or(ApiError::NotFound)?;
    Ok(Json(
        zone.records
            .iter()
            .map(|record| RecordResponse::new(&zone, record))
            .collect(),
    ))
}

async fn update_record(
    State(mock): State<MockServer>,
    Path((zone_id, record_id)): Path<(String, String)>,
    Json(body): Json<RecordUpdateRequest>,
) -> ApiResult<(StatusCode, Json<RecordResponse>)> {
    let (zone, record) = mock
        .update_record_data(
            parse_id(&zone_id)?,
            parse_id(&record_id)?,
            &body.zone_record.data,
        )
        .ok_or(ApiError::NotFound)?;
    Ok((StatusCode::ACCEPTED, Json(RecordResponse::new(&zone, &record))))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
