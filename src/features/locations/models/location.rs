use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::locations::dtos::{LocationResponseDto, LocationSummaryDto};

/// Database model for a saved location
#[derive(Debug, Clone, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub landmark: Option<String>,
    pub zip_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Location> for LocationResponseDto {
    fn from(l: Location) -> Self {
        Self {
            id: l.id,
            name: l.name,
            latitude: l.latitude,
            longitude: l.longitude,
            landmark: l.landmark,
            zip_code: l.zip_code,
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}

impl From<&Location> for LocationSummaryDto {
    fn from(l: &Location) -> Self {
        Self {
            name: l.name.clone(),
            landmark: l.landmark.clone(),
            zip_code: l.zip_code.clone(),
        }
    }
}
