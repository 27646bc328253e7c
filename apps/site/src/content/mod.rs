// Content Registry: static per-variant page copy and the JSON endpoints over it.

pub mod data;
pub mod handlers;
pub mod models;
pub mod registry;

pub use models::ContentBundle;
pub use registry::ContentRegistry;
