pub mod location_dto;

pub use location_dto::{
    CreateLocationDto, DeleteLocationResponseDto, DistanceRequestDto, DistanceResponseDto,
    LocationResponseDto, LocationSummaryDto, SearchLocationQuery, UpdateLocationDto,
};
