pub mod geocode;
pub mod places;
