//! Guarded Routes Router - route guards for client-side routers
//!
//! Two entry points:
//!
//! - [`GuardedRoute`]: a component that renders its children when a guard
//!   passes and redirects otherwise. Usable on its own.
//! - [`transform_guarded_routes`] / [`use_guarded_routes`]: turn a whole
//!   table of [`GuardedRouteObject`]s into plain [`RouteObject`]s for the
//!   host router, wrapping every guarded route in a `GuardedRoute`.
//!
//! ## Example
//!
//! ```
//! use guarded_routes_core::{Location, RenderTarget, with_location};
//! use guarded_routes_router::{GuardedRouteObject, transform_guarded_routes};
//!
//! let routes = transform_guarded_routes(vec![
//!     GuardedRouteObject::new("/").element(RenderTarget::from_fn(|| "Home")),
//!     GuardedRouteObject::new("/admin")
//!         .element(RenderTarget::from_fn(|| "Admin"))
//!         .guarded_by(|| false)
//!         .redirect("/login"),
//! ]);
//!
//! let page = with_location(Location::parse("/admin?x=1").unwrap(), || routes[1].render())
//!     .unwrap();
//! let navigate = page.as_redirect().unwrap();
//! assert_eq!(navigate.to(), "/login");
//! assert_eq!(navigate.state()["from"], "/admin?x=1");
//! ```
//!
//! Guards are synchronous and run on every render. A guard that panics is
//! not caught.

#![warn(missing_docs)]

pub mod engine;
pub mod guard;
pub mod route;
pub mod settings;
pub mod transform;

pub use engine::RouteEngine;
pub use guard::{FROM_STATE_KEY, Guard, GuardedRoute};
pub use route::{GuardedRouteObject, RouteObject};
pub use settings::{DEFAULT_REDIRECT, GuardSettings};
pub use transform::{transform_guarded_routes, use_guarded_routes};
