//! # Guarded Routes
//!
//! Route guards for client-side routers.
//!
//! Mark routes in a route table as guarded, give them a predicate, and every
//! time the host router renders one of them the predicate decides between the
//! route's own content and a redirect. The redirect carries the location the
//! user came from under the `from` state key, plus any extra state you
//! configure, so the destination (typically a login page) can send the user
//! back afterwards.
//!
//! This crate does not match paths or manage history. It rewrites the route
//! table and hands it to the host router through [`RouteEngine`].
//!
//! ## Feature Flags
//!
//! - `router` (default) - [`GuardedRoute`] and the route tree transform
//!
//! ## Quick Example
//!
//! ```
//! use guarded_routes::prelude::*;
//!
//! let routes = use_guarded_routes(
//!     vec![
//!         GuardedRouteObject::new("/").element(RenderTarget::from_fn(|| "Home")),
//!         GuardedRouteObject::new("/account")
//!             .element(RenderTarget::from_fn(|| "Account"))
//!             .guarded_by(|| false)
//!             .redirect("/login")
//!             .replace(true),
//!     ],
//!     &(),
//! );
//!
//! let _scope = provide_location(Location::parse("/account?tab=billing").unwrap());
//! let page = routes[1].render().unwrap();
//! let navigate = page.as_redirect().unwrap();
//! assert_eq!(navigate.to(), "/login");
//! assert_eq!(navigate.state()["from"], "/account?tab=billing");
//! ```

#![warn(missing_docs)]

pub use guarded_routes_core as core;
#[cfg(feature = "router")]
pub use guarded_routes_router as router;

// Re-export host primitives
pub use guarded_routes_core::{
	Component, IntoPage, Location, LocationScope, Navigate, NavigationState, Page, PageElement,
	RenderTarget, RouterError, RouterResult, provide_location, use_location, with_location,
};

// Re-export the guard layer
#[cfg(feature = "router")]
pub use guarded_routes_router::{
	DEFAULT_REDIRECT, FROM_STATE_KEY, Guard, GuardSettings, GuardedRoute, GuardedRouteObject,
	RouteEngine, RouteObject, transform_guarded_routes, use_guarded_routes,
};

/// Commonly used types and functions.
pub mod prelude {
	pub use crate::{
		Component, IntoPage, Location, Navigate, NavigationState, Page, PageElement, RenderTarget,
		RouterError, provide_location, use_location, with_location,
	};

	#[cfg(feature = "router")]
	pub use crate::{
		GuardSettings, GuardedRoute, GuardedRouteObject, RouteEngine, RouteObject,
		transform_guarded_routes, use_guarded_routes,
	};
}
