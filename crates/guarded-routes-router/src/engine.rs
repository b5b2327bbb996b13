//! The seam to the host router.

use crate::route::RouteObject;

/// A host router's route resolution entry point.
///
/// The guard layer never matches paths itself; it hands the transformed
/// tree to an engine and returns whatever the engine produces.
pub trait RouteEngine {
	/// What resolving a route table produces.
	type Output;

	/// Resolves the route table against the engine's current location.
	fn resolve(&self, routes: Vec<RouteObject>) -> Self::Output;
}

/// A placeholder engine that returns the route table unchanged.
///
/// Useful when the caller only needs the transformed table.
impl RouteEngine for () {
	type Output = Vec<RouteObject>;

	fn resolve(&self, routes: Vec<RouteObject>) -> Self::Output {
		routes
	}
}

impl<F, T> RouteEngine for F
where
	F: Fn(Vec<RouteObject>) -> T,
{
	type Output = T;

	fn resolve(&self, routes: Vec<RouteObject>) -> Self::Output {
		self(routes)
	}
}
