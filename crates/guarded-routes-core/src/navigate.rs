//! The redirect primitive.

use crate::component::Component;
use crate::error::RouterResult;
use crate::page::{Page, PageElement};
use serde::{Deserialize, Serialize};

/// State carried along with a navigation.
///
/// Keys are strings and values are arbitrary JSON.
pub type NavigationState = serde_json::Map<String, serde_json::Value>;

/// A navigation instruction: go to `to`, optionally replacing the current
/// history entry, carrying `state`.
///
/// Rendering a `Navigate` yields [`Page::Redirect`]; the host router performs
/// the actual history update.
///
/// # Example
///
/// ```
/// use guarded_routes_core::{Navigate, NavigationState};
///
/// let mut state = NavigationState::new();
/// state.insert("reason".to_string(), "expired".into());
///
/// let navigate = Navigate::new("/login").replace(true).with_state(state);
/// assert_eq!(navigate.to(), "/login");
/// assert!(navigate.is_replace());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigate {
	/// The destination path.
	to: String,
	/// Whether to replace the current history entry.
	#[serde(default)]
	replace: bool,
	/// State passed to the destination.
	#[serde(default)]
	state: NavigationState,
}

impl Navigate {
	/// Creates a push navigation with empty state.
	pub fn new(to: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			replace: false,
			state: NavigationState::new(),
		}
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Sets the navigation state.
	pub fn with_state(mut self, state: NavigationState) -> Self {
		self.state = state;
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns whether this is a replace navigation.
	pub fn is_replace(&self) -> bool {
		self.replace
	}

	/// Returns the navigation state.
	pub fn state(&self) -> &NavigationState {
		&self.state
	}

	/// Markup fallback used when a redirect is rendered to HTML.
	pub(crate) fn to_element(&self) -> PageElement {
		let mut el = PageElement::new("meta")
			.attr("http-equiv", "refresh")
			.attr("content", format!("0;url={}", self.to))
			.attr("data-redirect", self.to.clone())
			.attr("data-replace", if self.replace { "true" } else { "false" });

		if !self.state.is_empty() {
			el = el.attr(
				"data-state",
				serde_json::Value::Object(self.state.clone()).to_string(),
			);
		}

		el
	}
}

impl Component for Navigate {
	fn render(&self) -> RouterResult<Page> {
		Ok(Page::Redirect(self.clone()))
	}

	fn name() -> &'static str {
		"Navigate"
	}
}
