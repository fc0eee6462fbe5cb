//! Callback handler implementations and their registration pass

pub mod distance_filter;
pub mod favorite_toggle;
pub mod favorites_list;
pub mod navigation;
pub mod race_detail;
pub mod race_list;
pub mod race_location;
pub mod race_registration;
pub mod uf_filter;

use std::sync::Arc;

use crate::callback::registry::CallbackRegistry;
use crate::services::analytics::AnalyticsApiService;
use crate::services::favorites::FavoriteApiService;
use crate::services::races::RaceApiService;

pub use distance_filter::DistanceFilterCallbackHandler;
pub use favorite_toggle::FavoriteToggleCallbackHandler;
pub use favorites_list::RaceListFavoriteCallbackHandler;
pub use navigation::NavigationCallbackHandler;
pub use race_detail::{RaceDetailCallbackHandler, RaceDetailsCallbackHandler};
pub use race_list::{RaceFilterCallbackHandler, RaceListCallbackHandler};
pub use race_location::RaceLocationCallbackHandler;
pub use race_registration::RaceRegistrationCallbackHandler;
pub use uf_filter::UfFilterCallbackHandler;

/// Registers every built-in handler into `registry`
///
/// The one-time registration pass the dispatcher relies on; no handler is
/// discovered at decode time. Idempotent through the registry's identity
/// guard.
pub fn register_default_handlers(
    registry: &mut CallbackRegistry,
    races: &Arc<RaceApiService>,
    favorites: &Arc<FavoriteApiService>,
    analytics: &Arc<AnalyticsApiService>,
) {
    registry.register(Arc::new(UfFilterCallbackHandler));
    registry.register(Arc::new(DistanceFilterCallbackHandler::new(Arc::clone(races))));
    registry.register(Arc::new(RaceDetailCallbackHandler::new(Arc::clone(races))));
    registry.register(Arc::new(RaceDetailsCallbackHandler::new(Arc::clone(races))));
    registry.register(Arc::new(RaceLocationCallbackHandler::new(Arc::clone(races))));
    registry.register(Arc::new(RaceRegistrationCallbackHandler::new(
        Arc::clone(races),
        Arc::clone(analytics),
    )));
    registry.register(Arc::new(FavoriteToggleCallbackHandler::new(
        Arc::clone(races),
        Arc::clone(favorites),
        Arc::clone(analytics),
    )));
    registry.register(Arc::new(RaceListCallbackHandler::new(Arc::clone(races))));
    registry.register(Arc::new(RaceFilterCallbackHandler::new(Arc::clone(races))));
    registry.register(Arc::new(RaceListFavoriteCallbackHandler::new(
        Arc::clone(favorites),
        Arc::clone(analytics),
    )));
    registry.register(Arc::new(NavigationCallbackHandler));
}
