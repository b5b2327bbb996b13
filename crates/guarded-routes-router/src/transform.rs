//! Guarded route tree transform.

use crate::engine::RouteEngine;
use crate::guard::GuardedRoute;
use crate::route::{GuardedRouteObject, RouteObject};
use guarded_routes_core::RenderTarget;

/// Rewrites a tree of route descriptors into plain route nodes.
///
/// Children are transformed first. Guarded descriptors get their element
/// wrapped in a [`GuardedRoute`] configured with the descriptor's guard and
/// redirect settings; every other descriptor keeps its element as is. Order,
/// nesting and routing metadata are preserved one to one.
///
/// Nothing is validated: a guarded descriptor without a guard produces a
/// route that always redirects.
pub fn transform_guarded_routes(routes: Vec<GuardedRouteObject>) -> Vec<RouteObject> {
	routes.into_iter().map(transform_route).collect()
}

fn transform_route(route: GuardedRouteObject) -> RouteObject {
	let GuardedRouteObject {
		path,
		index,
		case_sensitive,
		id,
		element,
		children,
		is_guarded,
		guard,
		settings,
	} = route;

	let children = children.map(transform_guarded_routes);

	let element = if is_guarded {
		tracing::trace!(
			path = path.as_deref().unwrap_or(""),
			index = index,
			has_guard = guard.is_some(),
			"wrapping guarded route"
		);
		let guarded = GuardedRoute::from_settings(settings)
			.set_guard(guard)
			.set_children(element);
		Some(RenderTarget::from_component(guarded))
	} else {
		element
	};

	RouteObject {
		path,
		index,
		case_sensitive,
		id,
		element,
		children,
	}
}

/// Transforms `routes` and hands the result to `engine`.
///
/// Call this on every render pass; guards are evaluated when the engine
/// renders the matched elements, never ahead of time.
///
/// ```
/// use guarded_routes_core::RenderTarget;
/// use guarded_routes_router::{GuardedRouteObject, use_guarded_routes};
///
/// let routes = use_guarded_routes(
///     vec![GuardedRouteObject::new("/admin")
///         .element(RenderTarget::from_fn(|| "Admin"))
///         .guarded_by(|| true)],
///     &(),
/// );
/// assert_eq!(routes[0].render().unwrap().render_to_string(), "Admin");
/// ```
pub fn use_guarded_routes<E>(routes: Vec<GuardedRouteObject>, engine: &E) -> E::Output
where
	E: RouteEngine,
{
	let routes = transform_guarded_routes(routes);
	tracing::debug!(
		top_level = routes.len(),
		total = routes.iter().map(RouteObject::count).sum::<usize>(),
		"resolving guarded route table"
	);
	engine.resolve(routes)
}

#[cfg(test)]
mod tests {
	use super::*;
	use guarded_routes_core::{Location, Page, with_location};
	use rstest::rstest;

	fn page(text: &'static str) -> RenderTarget {
		RenderTarget::from_fn(move || text)
	}

	#[rstest]
	fn test_unguarded_element_is_untouched() {
		let home = page("Home");
		let routes =
			transform_guarded_routes(vec![GuardedRouteObject::new("/").element(home.clone())]);

		assert_eq!(routes.len(), 1);
		assert!(routes[0].element().unwrap().ptr_eq(&home));
	}

	#[rstest]
	fn test_guarded_element_is_wrapped() {
		let admin = page("Admin");
		let routes = transform_guarded_routes(vec![
			GuardedRouteObject::new("/admin")
				.element(admin.clone())
				.guarded_by(|| true),
		]);

		let element = routes[0].element().unwrap();
		assert!(!element.ptr_eq(&admin));
		assert_eq!(element.render().unwrap().render_to_string(), "Admin");
	}

	#[rstest]
	fn test_guard_without_flag_is_ignored() {
		let admin = page("Admin");
		let routes = transform_guarded_routes(vec![
			GuardedRouteObject::new("/admin")
				.element(admin.clone())
				.guard(|| false),
		]);

		assert!(routes[0].element().unwrap().ptr_eq(&admin));
	}

	#[rstest]
	fn test_guarded_without_element_gets_one() {
		let routes =
			transform_guarded_routes(vec![GuardedRouteObject::layout().guarded_by(|| true)]);

		let element = routes[0].element().unwrap();
		assert_eq!(element.render().unwrap(), Page::Empty);
	}

	#[rstest]
	fn test_guarded_without_guard_redirects() {
		let routes = transform_guarded_routes(vec![
			GuardedRouteObject::new("/admin")
				.element(page("Admin"))
				.guarded(true),
		]);

		let rendered = with_location(Location::new("/admin"), || routes[0].render()).unwrap();
		assert_eq!(rendered.as_redirect().map(|n| n.to()), Some("/"));
	}

	#[rstest]
	fn test_metadata_passes_through() {
		let routes = transform_guarded_routes(vec![
			GuardedRouteObject::new("/Users")
				.id("users")
				.case_sensitive(true)
				.guarded_by(|| true)
				.child(GuardedRouteObject::index().element(page("List"))),
		]);

		let users = &routes[0];
		assert_eq!(users.path(), Some("/Users"));
		assert_eq!(users.id(), Some("users"));
		assert!(users.is_case_sensitive());
		assert!(!users.is_index());
		assert!(users.children().unwrap()[0].is_index());
	}

	#[rstest]
	fn test_use_guarded_routes_calls_engine_once() {
		let calls = std::cell::Cell::new(0);
		let engine = |routes: Vec<RouteObject>| {
			calls.set(calls.get() + 1);
			routes.len()
		};

		let resolved = use_guarded_routes(
			vec![GuardedRouteObject::new("/"), GuardedRouteObject::new("/about")],
			&engine,
		);
		assert_eq!(resolved, 2);
		assert_eq!(calls.get(), 1);
	}
}
