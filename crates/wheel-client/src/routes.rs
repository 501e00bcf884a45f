//! Application routes.

use wheel_core::Variant;
use yew_router::prelude::*;

/// Application routes.
#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    /// Classic wheel with rotated labels.
    #[at("/")]
    Classic,
    /// Wheel with labels placed on sine/cosine coordinates.
    #[at("/polar")]
    Polar,
    #[at("/panic")]
    Panic,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn variant(self) -> Option<Variant> {
        match self {
            Route::Classic => Some(Variant::Classic),
            Route::Polar => Some(Variant::Polar),
            Route::Panic | Route::NotFound => None,
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Route::Classic,
            Variant::Polar => Route::Polar,
        }
    }
}
