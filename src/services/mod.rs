//! Thin wrappers over the backend race platform APIs

pub mod analytics;
pub mod favorites;
pub mod http;
pub mod models;
pub mod races;

pub use analytics::AnalyticsApiService;
pub use favorites::FavoriteApiService;
pub use http::HttpClient;
pub use races::RaceApiService;
