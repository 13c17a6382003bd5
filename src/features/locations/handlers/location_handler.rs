use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::locations::dtos::{
    CreateLocationDto, DeleteLocationResponseDto, DistanceRequestDto, DistanceResponseDto,
    LocationResponseDto, SearchLocationQuery, UpdateLocationDto,
};
use crate::features::locations::services::LocationService;
use crate::shared::types::{ApiResponse, Meta};

/// Save a new location
///
/// Fails with 409 when a location with the same name (case-insensitive)
/// already exists.
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location saved successfully", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Location with this name already exists")
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<CreateLocationDto>,
) -> Result<(StatusCode, Json<ApiResponse<LocationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(location),
            Some("Location added successfully".to_string()),
            None,
        )),
    ))
}

/// List all saved locations
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "List of saved locations", body = ApiResponse<Vec<LocationResponseDto>>),
    ),
    tag = "locations"
)]
pub async fn list_locations(
    State(service): State<Arc<LocationService>>,
) -> Result<Json<ApiResponse<Vec<LocationResponseDto>>>> {
    let locations = service.list().await?;
    let total = locations.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(locations),
        None,
        Some(Meta { total }),
    )))
}

/// Look a saved location up by name
///
/// The name is matched case-insensitively; no partial matching.
#[utoipa::path(
    get,
    path = "/api/locations/search",
    params(SearchLocationQuery),
    responses(
        (status = 200, description = "Location found", body = ApiResponse<LocationResponseDto>),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn search_location(
    State(service): State<Arc<LocationService>>,
    Query(query): Query<SearchLocationQuery>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    let location = service.find_by_name(&query.name).await?;
    Ok(Json(ApiResponse::success(Some(location), None, None)))
}

/// Compute the great-circle distance between two saved locations
#[utoipa::path(
    post,
    path = "/api/locations/distance",
    request_body = DistanceRequestDto,
    responses(
        (status = 200, description = "Distance between the two locations", body = ApiResponse<DistanceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "One or both locations not found")
    ),
    tag = "locations"
)]
pub async fn distance_between_locations(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<DistanceRequestDto>,
) -> Result<Json<ApiResponse<DistanceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let distance = service.distance(dto).await?;
    Ok(Json(ApiResponse::success(Some(distance), None, None)))
}

/// Edit a saved location
///
/// Only the supplied fields change; renaming re-checks name uniqueness.
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Location identifier")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Location updated successfully", body = ApiResponse<LocationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location not found"),
        (status = 409, description = "Location with this name already exists")
    ),
    tag = "locations"
)]
pub async fn update_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateLocationDto>,
) -> Result<Json<ApiResponse<LocationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(location),
        Some("Location updated successfully".to_string()),
        None,
    )))
}

/// Delete a saved location
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(
        ("id" = Uuid, Path, description = "Location identifier")
    ),
    responses(
        (status = 200, description = "Location deleted successfully", body = ApiResponse<DeleteLocationResponseDto>),
        (status = 404, description = "Location not found")
    ),
    tag = "locations"
)]
pub async fn delete_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteLocationResponseDto>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        Some(DeleteLocationResponseDto { deleted: true }),
        Some("Location deleted successfully".to_string()),
        None,
    )))
}
