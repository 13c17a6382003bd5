pub mod location_handler;

pub use location_handler::{
    create_location, delete_location, distance_between_locations, list_locations, search_location,
    update_location,
};
