use utoipa::{Modify, OpenApi};

use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations
        locations_handlers::location_handler::create_location,
        locations_handlers::location_handler::list_locations,
        locations_handlers::location_handler::search_location,
        locations_handlers::location_handler::distance_between_locations,
        locations_handlers::location_handler::update_location,
        locations_handlers::location_handler::delete_location,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Locations
            locations_dtos::CreateLocationDto,
            locations_dtos::UpdateLocationDto,
            locations_dtos::DistanceRequestDto,
            locations_dtos::LocationResponseDto,
            locations_dtos::LocationSummaryDto,
            locations_dtos::DistanceResponseDto,
            locations_dtos::DeleteLocationResponseDto,
            ApiResponse<locations_dtos::LocationResponseDto>,
            ApiResponse<Vec<locations_dtos::LocationResponseDto>>,
            ApiResponse<locations_dtos::DistanceResponseDto>,
            ApiResponse<locations_dtos::DeleteLocationResponseDto>,
        )
    ),
    tags(
        (name = "locations", description = "Saved locations and distance lookups"),
    ),
    info(
        title = "Geomark API",
        version = "0.1.0",
        description = "Location bookmarking and distance lookup API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
