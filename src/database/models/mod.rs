pub mod direction_poi;
pub mod poi;
pub mod site;

pub use direction_poi::DirectionPoi;
pub use poi::Poi;
pub use site::Site;
