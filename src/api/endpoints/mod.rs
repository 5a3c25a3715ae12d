pub mod alerts;
pub mod geofences;
pub mod health;
pub mod location;
pub mod nearest;
pub mod pages;
