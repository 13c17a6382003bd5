use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request DTO for saving a new location
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocationDto {
    /// Display name, unique case-insensitively across all saved locations
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        regex(
            path = "*crate::shared::validation::NON_BLANK_REGEX",
            message = "Name must not be blank"
        )
    )]
    pub name: String,

    /// Latitude in decimal degrees
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    /// Optional free-form landmark description
    #[validate(length(max = 255, message = "Landmark must not exceed 255 characters"))]
    pub landmark: Option<String>,

    /// Optional free-form postal code
    #[validate(length(max = 32, message = "Zip code must not exceed 32 characters"))]
    pub zip_code: Option<String>,
}

/// Request DTO for editing a saved location; only supplied fields change
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        regex(
            path = "*crate::shared::validation::NON_BLANK_REGEX",
            message = "Name must not be blank"
        )
    )]
    pub name: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: Option<f64>,

    #[validate(length(max = 255, message = "Landmark must not exceed 255 characters"))]
    pub landmark: Option<String>,

    #[validate(length(max = 32, message = "Zip code must not exceed 32 characters"))]
    pub zip_code: Option<String>,
}

/// Query params for searching a location by name
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct SearchLocationQuery {
    /// Name to look up (matched case-insensitively)
    pub name: String,
}

/// Request DTO for a distance lookup between two saved locations
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistanceRequestDto {
    /// Name of the starting location
    #[validate(
        length(min = 1, message = "name1 is required"),
        regex(
            path = "*crate::shared::validation::NON_BLANK_REGEX",
            message = "name1 must not be blank"
        )
    )]
    pub name1: String,

    /// Name of the destination location
    #[validate(
        length(min = 1, message = "name2 is required"),
        regex(
            path = "*crate::shared::validation::NON_BLANK_REGEX",
            message = "name2 must not be blank"
        )
    )]
    pub name2: String,
}

/// Response DTO for a saved location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponseDto {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display fields of one endpoint of a distance lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummaryDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Response DTO for a distance lookup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResponseDto {
    pub from: LocationSummaryDto,
    pub to: LocationSummaryDto,
    /// Great-circle distance in miles, full floating-point precision
    pub distance_miles: f64,
    /// Distance formatted for display, e.g. "104.25 miles"
    pub distance_text: String,
}

/// Response DTO confirming a deletion
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteLocationResponseDto {
    /// Confirmation that the location was deleted
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_create() -> CreateLocationDto {
        CreateLocationDto {
            name: "University of Wisconsin".to_string(),
            latitude: 43.0766,
            longitude: -89.4125,
            landmark: Some("Bascom Hall".to_string()),
            zip_code: Some("53706".to_string()),
        }
    }

    #[test]
    fn create_dto_accepts_valid_input() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_out_of_range_latitude() {
        let mut dto = valid_create();
        dto.latitude = 90.5;
        assert!(dto.validate().is_err());

        dto.latitude = -91.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_out_of_range_longitude() {
        let mut dto = valid_create();
        dto.longitude = 180.1;
        assert!(dto.validate().is_err());

        dto.longitude = -181.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_blank_name() {
        let mut dto = valid_create();
        dto.name = "   ".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_accepts_boundary_coordinates() {
        let mut dto = valid_create();
        dto.latitude = 90.0;
        dto.longitude = -180.0;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_dto_validates_only_supplied_fields() {
        let dto = UpdateLocationDto {
            name: None,
            latitude: None,
            longitude: None,
            landmark: Some("Observatory".to_string()),
            zip_code: None,
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateLocationDto {
            name: None,
            latitude: Some(123.0),
            longitude: None,
            landmark: None,
            zip_code: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn distance_request_rejects_blank_names() {
        let dto = DistanceRequestDto {
            name1: "".to_string(),
            name2: "state capitol".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
