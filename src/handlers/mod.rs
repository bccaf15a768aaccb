pub mod content;
pub mod directions;
pub mod pois;
pub mod sites;
