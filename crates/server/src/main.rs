// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use stayquote::QuoteCache;
use stayquote_api::{
    ApiError, CreateHotelRequest, CreateHotelResponse, CreateRoomTypeRequest,
    CreateRoomTypeResponse, ListRoomTypesResponse, QuoteRequest, QuoteResponse, RoomTypeInfo,
    SetInventoryRequest, SetPriceOverrideRequest, UpsertResponse, quote, validate_create_hotel,
    validate_create_room_type, validate_set_inventory, validate_set_price_override,
};
use stayquote_cache::DEFAULT_QUOTE_TTL;
use stayquote_domain::{HotelId, format_ymd};
use stayquote_persistence::{Persistence, PersistenceError};
use tokio::sync::Mutex;
use tracing::{error, info};

/// StayQuote Server - HTTP server for the availability and pricing quote
/// engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses
    /// in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Time-to-live for cached quotes, in seconds
    #[arg(long, default_value_t = DEFAULT_QUOTE_TTL.as_secs())]
    cache_ttl_secs: u64,
}

/// Application state shared across handlers.
///
/// Both clients are constructed once at startup and injected here: the
/// persistence adapter behind a mutex (its connection is exclusive) and
/// the quote cache (internally shared, cheap to clone).
#[derive(Clone)]
struct AppState {
    /// The persistence adapter for the catalog and calendar tables.
    persistence: Arc<Mutex<Persistence>>,
    /// The quote memoization cache.
    cache: QuoteCache,
}

/// Query parameters for listing room types.
#[derive(Debug, Deserialize)]
struct ListRoomTypesQuery {
    /// The hotel whose room types to list.
    hotel_id: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { message } => {
                // Full detail goes to the log; callers get a generic
                // failure with nothing quote-specific in it.
                error!(detail = %message, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::DuplicateRecord(message) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!("Duplicate record: {message}"),
            },
            PersistenceError::ForeignKeyViolation(message) => Self {
                status: StatusCode::NOT_FOUND,
                message: format!("Referenced record does not exist: {message}"),
            },
            other => {
                error!(error = %other, "Persistence error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

/// Handler for POST `/availability/quote`.
///
/// Computes the availability and pricing quote for a stay.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, HttpError> {
    info!(
        hotel_id = %req.hotel_id,
        check_in = %req.check_in,
        check_out = %req.check_out,
        guests = req.guests,
        "Handling quote request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: QuoteResponse = quote(&mut *persistence, &app_state.cache, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/hotels`.
///
/// Creates a new hotel.
async fn handle_create_hotel(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateHotelRequest>,
) -> Result<Json<CreateHotelResponse>, HttpError> {
    info!(hotel_id = %req.hotel_id, "Handling create_hotel request");

    let hotel = validate_create_hotel(&req)?;

    let mut persistence = app_state.persistence.lock().await;
    persistence.create_hotel(&hotel)?;
    drop(persistence);

    info!(hotel_id = %req.hotel_id, "Successfully created hotel");

    Ok(Json(CreateHotelResponse {
        hotel_id: hotel.hotel_id.value().to_string(),
        message: format!("Created hotel '{}'", hotel.hotel_id.value()),
    }))
}

/// Handler for POST `/room_types`.
///
/// Creates a new room type under an existing hotel.
async fn handle_create_room_type(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateRoomTypeRequest>,
) -> Result<Json<CreateRoomTypeResponse>, HttpError> {
    info!(
        room_type_id = %req.room_type_id,
        hotel_id = %req.hotel_id,
        "Handling create_room_type request"
    );

    let room_type = validate_create_room_type(&req)?;

    let mut persistence = app_state.persistence.lock().await;
    if !persistence.hotel_exists(&room_type.hotel_id)? {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("Hotel '{}' does not exist", room_type.hotel_id.value()),
        });
    }
    persistence.create_room_type(&room_type)?;
    drop(persistence);

    info!(
        room_type_id = %req.room_type_id,
        hotel_id = %req.hotel_id,
        "Successfully created room type"
    );

    Ok(Json(CreateRoomTypeResponse {
        room_type_id: room_type.room_type_id.value().to_string(),
        hotel_id: room_type.hotel_id.value().to_string(),
        message: format!(
            "Created room type '{}' in hotel '{}'",
            room_type.room_type_id.value(),
            room_type.hotel_id.value()
        ),
    }))
}

/// Handler for GET `/room_types`.
///
/// Lists all room types for a given hotel.
async fn handle_list_room_types(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListRoomTypesQuery>,
) -> Result<Json<ListRoomTypesResponse>, HttpError> {
    info!(hotel_id = %query.hotel_id, "Handling list_room_types request");

    let hotel_id = HotelId::new(&query.hotel_id);

    let mut persistence = app_state.persistence.lock().await;
    if !persistence.hotel_exists(&hotel_id)? {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("Hotel '{}' does not exist", query.hotel_id),
        });
    }
    let room_types = persistence.list_room_types(&hotel_id)?;
    drop(persistence);

    Ok(Json(ListRoomTypesResponse {
        hotel_id: query.hotel_id,
        room_types: room_types
            .into_iter()
            .map(|rt| RoomTypeInfo {
                room_type_id: rt.room_type_id.value().to_string(),
                name: rt.name,
                capacity: rt.capacity,
                base_price: rt.base_price,
            })
            .collect(),
    }))
}

/// Handler for PUT `/inventory`.
///
/// Upserts one inventory record. Quotes cached before this write keep
/// serving the old value until their TTL elapses.
async fn handle_set_inventory(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetInventoryRequest>,
) -> Result<Json<UpsertResponse>, HttpError> {
    info!(
        room_type_id = %req.room_type_id,
        date = %req.date,
        available = req.available,
        "Handling set_inventory request"
    );

    let record = validate_set_inventory(&req)?;

    let mut persistence = app_state.persistence.lock().await;
    if !persistence.room_type_exists(&record.room_type_id)? {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("Room type '{}' does not exist", record.room_type_id.value()),
        });
    }
    persistence.set_inventory(&record)?;
    drop(persistence);

    Ok(Json(UpsertResponse {
        room_type_id: record.room_type_id.value().to_string(),
        date: format_ymd(record.date),
        message: format!(
            "Set inventory for '{}' on {}",
            record.room_type_id.value(),
            format_ymd(record.date)
        ),
    }))
}

/// Handler for PUT `/price_overrides`.
///
/// Upserts one price override. Quotes cached before this write keep
/// serving the old value until their TTL elapses.
async fn handle_set_price_override(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetPriceOverrideRequest>,
) -> Result<Json<UpsertResponse>, HttpError> {
    info!(
        room_type_id = %req.room_type_id,
        date = %req.date,
        price = req.price,
        "Handling set_price_override request"
    );

    let over = validate_set_price_override(&req)?;

    let mut persistence = app_state.persistence.lock().await;
    if !persistence.room_type_exists(&over.room_type_id)? {
        return Err(HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("Room type '{}' does not exist", over.room_type_id.value()),
        });
    }
    persistence.set_price_override(&over)?;
    drop(persistence);

    Ok(Json(UpsertResponse {
        room_type_id: over.room_type_id.value().to_string(),
        date: format_ymd(over.date),
        message: format!(
            "Set price override for '{}' on {}",
            over.room_type_id.value(),
            format_ymd(over.date)
        ),
    }))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/availability/quote", post(handle_quote))
        .route("/hotels", post(handle_create_hotel))
        .route("/room_types", post(handle_create_room_type))
        .route("/room_types", get(handle_list_room_types))
        .route("/inventory", put(handle_set_inventory))
        .route("/price_overrides", put(handle_set_price_override))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing StayQuote Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let cache_ttl = Duration::from_secs(args.cache_ttl_secs);
    info!("Quote cache TTL: {}s", cache_ttl.as_secs());

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        cache: QuoteCache::new(cache_ttl),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
