//! The GuardedRoute component.
//!
//! `GuardedRoute` renders its children when its guard passes and a
//! [`Navigate`] to the configured redirect path otherwise. It is what
//! [`transform_guarded_routes`](crate::transform_guarded_routes) wraps guarded
//! routes in, and it can also be used on its own.

use crate::settings::GuardSettings;
use guarded_routes_core::{
	Component, Location, Navigate, NavigationState, Page, RenderTarget, RouterResult, use_location,
};
use std::sync::Arc;

/// Type alias for guard predicates.
pub type Guard = Arc<dyn Fn() -> bool + Send + Sync>;

/// State key holding the location the user was redirected away from.
pub const FROM_STATE_KEY: &str = "from";

/// Renders its children only while the guard passes.
///
/// The guard runs on every render; its result is never cached. A missing
/// guard always redirects.
///
/// # Example
///
/// ```
/// use guarded_routes_core::{Component, Location, RenderTarget, provide_location};
/// use guarded_routes_router::GuardedRoute;
///
/// let _scope = provide_location(Location::parse("/admin?x=1").unwrap());
///
/// let admin = GuardedRoute::new()
///     .guard(|| false)
///     .redirect("/login")
///     .children(RenderTarget::from_fn(|| "Admin"));
///
/// let page = admin.render().unwrap();
/// let navigate = page.as_redirect().unwrap();
/// assert_eq!(navigate.to(), "/login");
/// assert_eq!(navigate.state()["from"], "/admin?x=1");
/// ```
#[derive(Clone, Default)]
pub struct GuardedRoute {
	/// Content rendered when the guard passes.
	children: Option<RenderTarget>,
	/// The guard predicate.
	guard: Option<Guard>,
	/// Redirect policy on failure.
	settings: GuardSettings,
}

impl std::fmt::Debug for GuardedRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GuardedRoute")
			.field("has_children", &self.children.is_some())
			.field("has_guard", &self.guard.is_some())
			.field("settings", &self.settings)
			.finish()
	}
}

impl GuardedRoute {
	/// Creates a guarded route with default settings and no guard.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a guarded route with the given redirect settings.
	pub fn from_settings(settings: GuardSettings) -> Self {
		Self {
			settings,
			..Self::default()
		}
	}

	/// Sets the content rendered when the guard passes.
	pub fn children(mut self, children: RenderTarget) -> Self {
		self.children = Some(children);
		self
	}

	/// Sets the guard predicate.
	pub fn guard<G>(mut self, guard: G) -> Self
	where
		G: Fn() -> bool + Send + Sync + 'static,
	{
		self.guard = Some(Arc::new(guard));
		self
	}

	/// Sets the redirect path.
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

	pub(crate) fn set_children(mut self, children: Option<RenderTarget>) -> Self {
		self.children = children;
		self
	}

	pub(crate) fn set_guard(mut self, guard: Option<Guard>) -> Self {
		self.guard = guard;
		self
	}

	/// Returns the redirect settings.
	pub fn settings(&self) -> &GuardSettings {
		&self.settings
	}

	/// Evaluates the guard. An absent guard never allows.
	pub fn allows(&self) -> bool {
		self.guard.as_ref().is_some_and(|guard| guard())
	}

	/// Builds the redirect issued from `location`.
	///
	/// The state is `{ "from": <path + query> }` with the extra state merged
	/// on top, so an explicit `from` in the extra state takes precedence.
	pub fn redirect_for(&self, location: &Location) -> Navigate {
		let mut state = NavigationState::new();
		state.insert(FROM_STATE_KEY.to_string(), location.path_and_query().into());
		state.extend(self.settings.state.clone());

		Navigate::new(self.settings.redirect.clone())
			.replace(self.settings.replace)
			.with_state(state)
	}
}

impl Component for GuardedRoute {
	fn render(&self) -> RouterResult<Page> {
		if self.allows() {
			return match &self.children {
				Some(children) => children.render(),
				None => Ok(Page::Empty),
			};
		}

		let location = use_location()?;
		tracing::debug!(
			from = %location,
			to = %self.settings.redirect,
			has_guard = self.guard.is_some(),
			"guard rejected render, redirecting"
		);
		Ok(Page::Redirect(self.redirect_for(&location)))
	}

	fn name() -> &'static str {
		"GuardedRoute"
	}
}
