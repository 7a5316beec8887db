pub mod classes;
pub mod health;
pub mod predict;

pub use classes::list_classes;
pub use health::health_check;
pub use predict::predict;
