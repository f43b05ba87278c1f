//! HTTP API (actix-web).
//!
//! Thin glue around the planner and the CSV importer. Every failure is
//! answered with `{"error": "..."}` and the status from [`ApiError`].

use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, ResponseError, web};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ServerConfig;
use crate::haversine::Haversine;
use crate::ingest::{self, IngestError};
use crate::planner::{self, PlanOptions};
use crate::point::Point;
use crate::store::{PointStore, StoreError};

/// Multipart field carrying the uploaded file.
pub const CSV_FIELD: &str = "csv";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("No CSV file uploaded")]
    MissingUpload,
    #[error("CSV file too large")]
    UploadTooLarge,
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("Failed to convert to JSON")]
    Encode,
    #[error("Failed to save JSON file")]
    Save,
    #[error("No points uploaded")]
    NoPoints,
    #[error("Failed to read points")]
    Load,
    #[error("Failed to plan route")]
    Planning,
}

impl ApiError {
    fn from_save(err: StoreError) -> Self {
        tracing::error!("saving points failed: {err}");
        match err {
            StoreError::Encode(_) | StoreError::NonFinite { .. } => ApiError::Encode,
            _ => ApiError::Save,
        }
    }

    fn from_load(err: StoreError) -> Self {
        if err.is_not_found() {
            return ApiError::NoPoints;
        }
        tracing::error!("loading points failed: {err}");
        ApiError::Load
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput | ApiError::MissingUpload | ApiError::Ingest(_) => StatusCode::BAD_REQUEST,
            ApiError::UploadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NoPoints => StatusCode::NOT_FOUND,
            ApiError::Encode | ApiError::Save | ApiError::Load | ApiError::Planning => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub current: Point,
    #[serde(default)]
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub route: Vec<Point>,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: PointStore,
    pub max_upload_bytes: usize,
    pub max_route_bytes: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            store: PointStore::new(config.data_path.clone()),
            max_upload_bytes: config.max_upload_bytes,
            max_route_bytes: config.max_route_bytes,
        }
    }
}

/// Register the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let json = web::JsonConfig::default()
        .limit(state.max_route_bytes)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            tracing::debug!("rejected route request: {err}");
            ApiError::InvalidInput.into()
        });

    cfg.app_data(state).service(
        web::scope("/api")
            .app_data(json)
            .route("/hello", web::get().to(hello))
            .route("/route", web::post().to(route))
            .route("/upload-csv", web::post().to(upload_csv))
            .route("/points", web::get().to(points)),
    );
}

pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(&config));
    tracing::info!(
        host = %config.host,
        port = config.port,
        data_path = %config.data_path.display(),
        "starting HTTP server"
    );
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(|cfg| configure(cfg, state))
    })
    .bind(config.bind_addr())?
    .run()
    .await
}

async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageBody {
        message: "Hello from the route planner!",
    })
}

/// Planning is O(n^2), so it runs on the blocking pool rather than the worker.
async fn route(req: web::Json<RouteRequest>) -> Result<HttpResponse, ApiError> {
    let RouteRequest { current, points } = req.into_inner();
    let candidates = points.len();

    let route = web::block(move || {
        planner::plan_with(&current, &points, &Haversine, &PlanOptions::default())
    })
    .await
    .map_err(|err| {
        tracing::error!("planning task failed: {err}");
        ApiError::Planning
    })?;

    tracing::info!(
        candidates,
        placed = route.placed(),
        complete = route.is_complete(),
        "planned route"
    );

    Ok(HttpResponse::Ok().json(RouteResponse {
        route: route.into_waypoints(),
    }))
}

async fn upload_csv(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let bytes = read_csv_field(&mut payload, state.max_upload_bytes).await?;

    let points = ingest::parse_points(&bytes)
        .inspect_err(|err| tracing::warn!(line = ?err.line(), "rejected CSV upload: {err:?}"))?;
    state.store.save(&points).map_err(ApiError::from_save)?;

    Ok(HttpResponse::Ok().json(MessageBody {
        message: "CSV processed and saved as data.json",
    }))
}

async fn points(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let points = state.store.load().map_err(ApiError::from_load)?;
    Ok(HttpResponse::Ok().json(points))
}

/// Collect the bytes of the first `csv` field, skipping any other fields.
async fn read_csv_field(payload: &mut Multipart, limit: usize) -> Result<Vec<u8>, ApiError> {
    while let Some(mut field) = payload.try_next().await.map_err(upload_error)? {
        let is_csv = field.name() == Some(CSV_FIELD);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(upload_error)? {
            if !is_csv {
                continue;
            }
            if bytes.len() + chunk.len() > limit {
                return Err(ApiError::UploadTooLarge);
            }
            bytes.extend_from_slice(&chunk);
        }

        if is_csv {
            return Ok(bytes);
        }
    }

    Err(ApiError::MissingUpload)
}

fn upload_error(err: actix_multipart::MultipartError) -> ApiError {
    tracing::debug!("multipart read failed: {err}");
    ApiError::MissingUpload
}
