//! Redirect policy applied when a guard rejects.

use guarded_routes_core::{NavigationState, RouterError, RouterResult};
use serde::{Deserialize, Serialize};

/// Path used when no redirect target is configured.
pub const DEFAULT_REDIRECT: &str = "/";

/// Where and how to redirect when a guard fails.
///
/// Missing fields take their defaults when deserializing, so a settings
/// document only needs the values it changes:
///
/// ```
/// use guarded_routes_router::GuardSettings;
///
/// let settings = GuardSettings::from_json(r#"{ "redirect": "/login" }"#).unwrap();
/// assert_eq!(settings.redirect, "/login");
/// assert!(!settings.replace);
/// assert!(settings.state.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardSettings {
	/// Path to navigate to on guard failure.
	pub redirect: String,
	/// Replace the current history entry instead of pushing a new one.
	pub replace: bool,
	/// Extra state merged into the navigation state.
	pub state: NavigationState,
}

impl Default for GuardSettings {
	fn default() -> Self {
		Self {
			redirect: DEFAULT_REDIRECT.to_string(),
			replace: false,
			state: NavigationState::new(),
		}
	}
}

impl GuardSettings {
	/// Parses settings from a JSON document.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidSettings`] if the document is not valid
	/// JSON or a field has the wrong type.
	pub fn from_json(json: &str) -> RouterResult<Self> {
		serde_json::from_str(json).map_err(|e| RouterError::InvalidSettings(e.to_string()))
	}
}
