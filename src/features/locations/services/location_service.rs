use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{
    CreateLocationDto, DistanceRequestDto, DistanceResponseDto, LocationResponseDto,
    UpdateLocationDto,
};
use crate::features::locations::models::Location;

/// Earth's mean radius in miles (for Haversine formula)
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Fold a location name to its canonical stored form.
///
/// Names are compared case-insensitively, so they are trimmed and lowercased
/// before every insert and lookup.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Render a distance for display, two decimal places.
pub(crate) fn format_miles(miles: f64) -> String {
    format!("{:.2} miles", miles)
}

/// Convert database error to more specific AppError with user-friendly messages
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation (PostgreSQL error code 23505)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::Conflict("A location with this name already exists.".to_string());
        }
    }

    AppError::Database(e)
}

/// Service owning saved locations: name uniqueness and normalization,
/// lookups, and pairwise distance queries.
pub struct LocationService {
    pool: PgPool,
}

impl LocationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Calculate Haversine distance between two points in miles
    pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lon = (lon2 - lon1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_MILES * c
    }

    /// Save a new location.
    ///
    /// The name is normalized before the insert. The unique index on the
    /// stored name makes the uniqueness check and the insert a single atomic
    /// operation, so two concurrent creates with the same name cannot both
    /// succeed.
    pub async fn create(&self, dto: CreateLocationDto) -> Result<LocationResponseDto> {
        let name = normalize_name(&dto.name);

        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (name, latitude, longitude, landmark, zip_code)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, latitude, longitude, landmark, zip_code, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(dto.latitude)
        .bind(dto.longitude)
        .bind(dto.landmark)
        .bind(dto.zip_code)
        .fetch_one(&self.pool)
        .await
        .map_err(handle_db_error)?;

        tracing::info!(
            "Location created: id={}, name={}",
            location.id,
            location.name
        );

        Ok(location.into())
    }

    /// List all saved locations. Order is whatever the storage yields;
    /// consumers must not depend on it.
    pub async fn list(&self) -> Result<Vec<LocationResponseDto>> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, latitude, longitude, landmark, zip_code, created_at, updated_at
            FROM locations
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list locations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(locations.into_iter().map(|l| l.into()).collect())
    }

    /// Look a location up by name, exact match after normalization.
    pub async fn find_by_name(&self, name: &str) -> Result<LocationResponseDto> {
        let normalized = normalize_name(name);

        self.fetch_by_normalized_name(&normalized)
            .await?
            .map(|l| l.into())
            .ok_or_else(|| AppError::NotFound(format!("Location '{}' not found", normalized)))
    }

    /// Apply the supplied fields to a saved location.
    ///
    /// Unspecified fields are left unchanged. A rename goes through the same
    /// unique index as a create, so an edit cannot produce a duplicate name
    /// either.
    pub async fn update(&self, id: Uuid, dto: UpdateLocationDto) -> Result<LocationResponseDto> {
        let name = dto.name.as_deref().map(normalize_name);

        let location = sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET name = COALESCE($1, name),
                latitude = COALESCE($2, latitude),
                longitude = COALESCE($3, longitude),
                landmark = COALESCE($4, landmark),
                zip_code = COALESCE($5, zip_code),
                updated_at = NOW()
            WHERE id = $6
            RETURNING id, name, latitude, longitude, landmark, zip_code, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(dto.latitude)
        .bind(dto.longitude)
        .bind(dto.landmark)
        .bind(dto.zip_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)?
        .ok_or_else(|| AppError::NotFound(format!("Location with id {} not found", id)))?;

        tracing::info!("Location updated: id={}", location.id);

        Ok(location.into())
    }

    /// Remove a location permanently. Deleting an unknown id is an error,
    /// not a silent success.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Location with id {} not found",
                id
            )));
        }

        tracing::info!("Location deleted: id={}", id);

        Ok(())
    }

    /// Resolve two saved locations by name and compute the great-circle
    /// distance between them.
    pub async fn distance(&self, dto: DistanceRequestDto) -> Result<DistanceResponseDto> {
        let name1 = normalize_name(&dto.name1);
        let name2 = normalize_name(&dto.name2);

        let from = self.fetch_by_normalized_name(&name1).await?;
        let to = self.fetch_by_normalized_name(&name2).await?;

        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (from, to) => {
                // Report every missing name, not just the first one.
                let mut missing = Vec::new();
                if from.is_none() {
                    missing.push(name1);
                }
                if to.is_none() {
                    missing.push(name2);
                }
                return Err(AppError::NotFound(format!(
                    "Location(s) not found: {}",
                    missing.join(", ")
                )));
            }
        };

        let miles = Self::haversine_miles(from.latitude, from.longitude, to.latitude, to.longitude);

        Ok(DistanceResponseDto {
            from: (&from).into(),
            to: (&to).into(),
            distance_miles: miles,
            distance_text: format_miles(miles),
        })
    }

    async fn fetch_by_normalized_name(&self, normalized: &str) -> Result<Option<Location>> {
        sqlx::query_as::<_, Location>(
            r#"
            SELECT id, name, latitude, longitude, landmark, zip_code, created_at, updated_at
            FROM locations
            WHERE LOWER(name) = $1
            "#,
        )
        .bind(normalized)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch location by name: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_known_fixture() {
        // Central Wisconsin fixture, approx 104 miles apart
        let distance = LocationService::haversine_miles(44.5, -89.5, 43.0, -89.4);

        assert!(distance > 103.0 && distance < 104.5);
    }

    #[test]
    fn test_haversine_symmetry() {
        let forward = LocationService::haversine_miles(44.5, -89.5, 43.0, -89.4);
        let backward = LocationService::haversine_miles(43.0, -89.4, 44.5, -89.5);

        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point() {
        let distance = LocationService::haversine_miles(43.0766, -89.4125, 43.0766, -89.4125);

        assert!(distance < 1e-9);
    }

    #[test]
    fn test_haversine_campus_to_capitol() {
        // University of Wisconsin to the State Capitol in Madison,
        // a bit under a mile and a half as the crow flies
        let distance = LocationService::haversine_miles(43.0766, -89.4125, 43.0747, -89.3844);

        assert!(distance > 1.3 && distance < 1.6);
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Madison"), "madison");
        assert_eq!(normalize_name("  State Capitol  "), "state capitol");
        assert_eq!(normalize_name("already lowercase"), "already lowercase");
    }

    #[test]
    fn test_normalize_name_idempotent() {
        let once = normalize_name("University Of Wisconsin");
        assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn test_format_miles_rounds_to_two_decimals() {
        assert_eq!(format_miles(1.42435), "1.42 miles");
        assert_eq!(format_miles(103.759), "103.76 miles");
        assert_eq!(format_miles(0.0), "0.00 miles");
    }
}
