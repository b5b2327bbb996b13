//! Route descriptors.
//!
//! [`GuardedRouteObject`] is what applications write; [`RouteObject`] is the
//! plain node the host router resolves. Both carry the same routing
//! metadata, and only the former knows about guards.

use crate::guard::Guard;
use crate::settings::GuardSettings;
use guarded_routes_core::{NavigationState, Page, RenderTarget, RouterResult};
use std::sync::Arc;

/// A route node as consumed by the host router.
///
/// Produced by [`transform_guarded_routes`](crate::transform_guarded_routes).
#[derive(Clone, Default)]
pub struct RouteObject {
	pub(crate) path: Option<String>,
	pub(crate) index: bool,
	pub(crate) case_sensitive: bool,
	pub(crate) id: Option<String>,
	pub(crate) element: Option<RenderTarget>,
	pub(crate) children: Option<Vec<RouteObject>>,
}

impl std::fmt::Debug for RouteObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteObject")
			.field("path", &self.path)
			.field("index", &self.index)
			.field("id", &self.id)
			.field("has_element", &self.element.is_some())
			.field("children", &self.children)
			.finish()
	}
}

impl RouteObject {
	/// Returns the path pattern.
	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	/// Returns whether this is an index route.
	pub fn is_index(&self) -> bool {
		self.index
	}

	/// Returns whether path matching is case sensitive.
	pub fn is_case_sensitive(&self) -> bool {
		self.case_sensitive
	}

	/// Returns the route id.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	/// Returns the render target.
	pub fn element(&self) -> Option<&RenderTarget> {
		self.element.as_ref()
	}

	/// Returns the nested routes.
	pub fn children(&self) -> Option<&[RouteObject]> {
		self.children.as_deref()
	}

	/// Renders the element, or an empty page for routes without one.
	pub fn render(&self) -> RouterResult<Page> {
		match &self.element {
			Some(element) => element.render(),
			None => Ok(Page::Empty),
		}
	}

	/// Returns the number of nodes in this subtree, including this one.
	pub fn count(&self) -> usize {
		1 + self
			.children
			.iter()
			.flatten()
			.map(RouteObject::count)
			.sum::<usize>()
	}
}

/// A route descriptor that may require a guard check before rendering.
///
/// Routing metadata (`path`, `index`, `case_sensitive`, `id`) and `children`
/// pass through the transform unchanged. When the route is marked guarded its
/// element is wrapped in a [`GuardedRoute`](crate::GuardedRoute).
///
/// # Example
///
/// ```
/// use guarded_routes_core::RenderTarget;
/// use guarded_routes_router::GuardedRouteObject;
///
/// let is_staff = || false;
///
/// let routes = vec![
///     GuardedRouteObject::new("/").element(RenderTarget::from_fn(|| "Home")),
///     GuardedRouteObject::new("/admin")
///         .element(RenderTarget::from_fn(|| "Admin"))
///         .guarded_by(is_staff)
///         .redirect("/login"),
/// ];
/// assert!(routes[1].is_guarded());
/// ```
#[derive(Clone, Default)]
pub struct GuardedRouteObject {
	pub(crate) path: Option<String>,
	pub(crate) index: bool,
	pub(crate) case_sensitive: bool,
	pub(crate) id: Option<String>,
	pub(crate) element: Option<RenderTarget>,
	pub(crate) children: Option<Vec<GuardedRouteObject>>,
	pub(crate) is_guarded: bool,
	pub(crate) guard: Option<Guard>,
	pub(crate) settings: GuardSettings,
}

impl std::fmt::Debug for GuardedRouteObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GuardedRouteObject")
			.field("path", &self.path)
			.field("index", &self.index)
			.field("id", &self.id)
			.field("has_element", &self.element.is_some())
			.field("is_guarded", &self.is_guarded)
			.field("has_guard", &self.guard.is_some())
			.field("settings", &self.settings)
			.field("children", &self.children)
			.finish()
	}
}

impl GuardedRouteObject {
	/// Creates a route matching `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: Some(path.into()),
			..Self::default()
		}
	}

	/// Creates an index route.
	pub fn index() -> Self {
		Self {
			index: true,
			..Self::default()
		}
	}

	/// Creates a pathless layout route.
	pub fn layout() -> Self {
		Self::default()
	}

	/// Sets the render target.
	pub fn element(mut self, element: RenderTarget) -> Self {
		self.element = Some(element);
		self
	}

	/// Sets whether path matching is case sensitive.
	pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
		self.case_sensitive = case_sensitive;
		self
	}

	/// Sets the route id.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the nested routes.
	pub fn children(mut self, children: Vec<GuardedRouteObject>) -> Self {
		self.children = Some(children);
		self
	}

	/// Appends a nested route.
	pub fn child(mut self, child: GuardedRouteObject) -> Self {
		self.children.get_or_insert_with(Vec::new).push(child);
		self
	}

	/// Marks the route as guarded (or not).
	///
	/// A guarded route without a guard always redirects.
	pub fn guarded(mut self, is_guarded: bool) -> Self {
		self.is_guarded = is_guarded;
		self
	}

	/// Sets the guard predicate without changing whether the route is guarded.
	pub fn guard<G>(mut self, guard: G) -> Self
	where
		G: Fn() -> bool + Send + Sync + 'static,
	{
		self.guard = Some(Arc::new(guard));
		self
	}

	/// Marks the route as guarded by `guard`.
	pub fn guarded_by<G>(self, guard: G) -> Self
	where
		G: Fn() -> bool + Send + Sync + 'static,
	{
		self.guard(guard).guarded(true)
	}

	/// Sets the redirect path used when the guard fails.
	pub fn redirect(mut self, to: impl Into<String>) -> Self {
		self.settings.redirect = to.into();
		self
	}

	/// Sets whether the redirect replaces the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.settings.replace = replace;
		self
	}

	/// Sets extra state carried by the redirect.
	pub fn state(mut self, state: NavigationState) -> Self {
		self.settings.state = state;
		self
	}

	/// Replaces all redirect settings.
	pub fn with_settings(mut self, settings: GuardSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Returns the path pattern.
	pub fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}

	/// Returns whether this is an index route.
	pub fn is_index(&self) -> bool {
		self.index
	}

	/// Returns whether the route requires a guard check.
	pub fn is_guarded(&self) -> bool {
		self.is_guarded
	}

	/// Returns whether a guard predicate is set.
	pub fn has_guard(&self) -> bool {
		self.guard.is_some()
	}

	/// Returns the redirect settings.
	pub fn settings(&self) -> &GuardSettings {
		&self.settings
	}
}

/// Lifts a resolved node back into an unguarded descriptor.
///
/// The element is kept as is, so feeding a resolved tree through the
/// transform again leaves every element untouched.
impl From<RouteObject> for GuardedRouteObject {
	fn from(route: RouteObject) -> Self {
		let RouteObject {
			path,
			index,
			case_sensitive,
			id,
			element,
			children,
		} = route;

		Self {
			path,
			index,
			case_sensitive,
			id,
			element,
			children: children.map(|children| children.into_iter().map(Self::from).collect()),
			..Self::default()
		}
	}
}
