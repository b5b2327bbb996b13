//! Current location and the ambient location context.
//!
//! The host router provides the location it is rendering for with
//! [`provide_location`]; anything rendered while the returned
//! [`LocationScope`] is alive reads it back with [`use_location`].
//!
//! ```
//! use guarded_routes_core::{Location, provide_location, use_location};
//!
//! let _scope = provide_location(Location::parse("/admin?tab=users").unwrap());
//! assert_eq!(use_location().unwrap().path_and_query(), "/admin?tab=users");
//! ```

use crate::error::{RouterError, RouterResult};
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

/// A location within the application: path, query string and fragment.
///
/// `search` includes its leading `?` and `hash` its leading `#`; both are
/// empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
	pathname: String,
	#[serde(default)]
	search: String,
	#[serde(default)]
	hash: String,
}

impl Location {
	/// Creates a location for a bare path.
	pub fn new(pathname: impl Into<String>) -> Self {
		Self {
			pathname: pathname.into(),
			search: String::new(),
			hash: String::new(),
		}
	}

	/// Parses a path with an optional query string and fragment.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidLocation`] if the input is empty or does
	/// not start with `/`.
	pub fn parse(url: &str) -> RouterResult<Self> {
		if url.is_empty() {
			return Err(RouterError::InvalidLocation("empty location".to_string()));
		}
		if !url.starts_with('/') {
			return Err(RouterError::InvalidLocation(format!(
				"location must start with '/': {}",
				url
			)));
		}

		let (rest, hash) = match url.split_once('#') {
			Some((rest, fragment)) => (rest, fragment),
			None => (url, ""),
		};
		let (pathname, search) = match rest.split_once('?') {
			Some((pathname, query)) => (pathname, query),
			None => (rest, ""),
		};

		Ok(Self::new(pathname).with_search(search).with_hash(hash))
	}

	/// Sets the query string. A leading `?` is optional.
	pub fn with_search(mut self, search: &str) -> Self {
		let search = search.strip_prefix('?').unwrap_or(search);
		self.search = if search.is_empty() {
			String::new()
		} else {
			format!("?{}", search)
		};
		self
	}

	/// Sets the fragment. A leading `#` is optional.
	pub fn with_hash(mut self, hash: &str) -> Self {
		let hash = hash.strip_prefix('#').unwrap_or(hash);
		self.hash = if hash.is_empty() {
			String::new()
		} else {
			format!("#{}", hash)
		};
		self
	}

	/// Returns the path.
	pub fn pathname(&self) -> &str {
		&self.pathname
	}

	/// Returns the query string, including the leading `?`.
	pub fn search(&self) -> &str {
		&self.search
	}

	/// Returns the fragment, including the leading `#`.
	pub fn hash(&self) -> &str {
		&self.hash
	}

	/// Returns the path followed by the query string.
	pub fn path_and_query(&self) -> String {
		format!("{}{}", self.pathname, self.search)
	}
}

impl Default for Location {
	fn default() -> Self {
		Self::new("/")
	}
}

impl std::fmt::Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{}{}", self.pathname, self.search, self.hash)
	}
}

impl std::str::FromStr for Location {
	type Err = RouterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

thread_local! {
	static LOCATION_STACK: RefCell<Vec<(u64, Location)>> = const { RefCell::new(Vec::new()) };
	static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Keeps a provided location current until dropped.
///
/// Scopes nest: the innermost live scope wins, and dropping it restores the
/// location of the enclosing scope. Dropping a scope only withdraws its own
/// location, even when scopes are dropped out of order.
#[must_use = "the location is only provided while the scope is alive"]
#[derive(Debug)]
pub struct LocationScope {
	id: u64,
	// Scopes index a thread-local stack.
	_not_send: PhantomData<*const ()>,
}

impl Drop for LocationScope {
	fn drop(&mut self) {
		LOCATION_STACK.with(|stack| {
			let mut stack = stack.borrow_mut();
			if let Some(index) = stack.iter().rposition(|(id, _)| *id == self.id) {
				stack.remove(index);
			}
		});
	}
}

/// Makes `location` the current location for this thread.
pub fn provide_location(location: Location) -> LocationScope {
	tracing::trace!(location = %location, "providing location");
	let id = NEXT_SCOPE_ID.with(|next| {
		let id = next.get();
		next.set(id.wrapping_add(1));
		id
	});
	LOCATION_STACK.with(|stack| stack.borrow_mut().push((id, location)));
	LocationScope {
		id,
		_not_send: PhantomData,
	}
}

/// Returns the current location.
///
/// # Errors
///
/// Returns [`RouterError::NoLocationContext`] when called outside of any
/// [`LocationScope`].
pub fn use_location() -> RouterResult<Location> {
	LOCATION_STACK
		.with(|stack| stack.borrow().last().map(|(_, location)| location.clone()))
		.ok_or(RouterError::NoLocationContext)
}

/// Runs `f` with `location` as the current location.
pub fn with_location<T>(location: Location, f: impl FnOnce() -> T) -> T {
	let _scope = provide_location(location);
	f()
}
