//! Error types for guarded routing.

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// A redirect was evaluated outside of any provided location scope.
	#[error("No location context: the current location has not been provided")]
	NoLocationContext,
	/// A location string could not be parsed.
	#[error("Invalid location: {0}")]
	InvalidLocation(String),
	/// A guard settings document could not be deserialized.
	#[error("Invalid guard settings: {0}")]
	InvalidSettings(String),
	/// A render target failed to produce a page.
	#[error("Render failed: {0}")]
	Render(String),
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(RouterError::InvalidLocation("admin".to_string()), "Invalid location: admin")]
	#[case(RouterError::Render("boom".to_string()), "Render failed: boom")]
	#[case(
		RouterError::InvalidSettings("missing field".to_string()),
		"Invalid guard settings: missing field"
	)]
	fn test_router_error_display(#[case] err: RouterError, #[case] expected: &str) {
		assert_eq!(err.to_string(), expected);
	}

	#[rstest]
	fn test_no_location_context_display() {
		assert!(
			RouterError::NoLocationContext
				.to_string()
				.starts_with("No location context")
		);
	}
}
