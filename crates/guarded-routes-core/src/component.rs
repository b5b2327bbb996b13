//! Component trait and shared render targets.

use crate::error::RouterResult;
use crate::page::{IntoPage, Page};
use std::sync::Arc;

/// Trait for renderable units.
///
/// Unlike a plain view function a component may fail; the error propagates
/// to whoever drives the render pass.
pub trait Component: Send + Sync + 'static {
	/// Renders the component to a Page.
	fn render(&self) -> RouterResult<Page>;

	/// Returns the component's name for debugging.
	fn name() -> &'static str
	where
		Self: Sized;
}

type RenderFn = dyn Fn() -> RouterResult<Page> + Send + Sync;

/// The content a route renders.
///
/// Cloning is cheap and clones share the same closure, which makes
/// [`RenderTarget::ptr_eq`] usable as an identity check.
#[derive(Clone)]
pub struct RenderTarget {
	inner: Arc<RenderFn>,
}

impl RenderTarget {
	/// Creates a render target from a fallible render closure.
	pub fn new<F>(render: F) -> Self
	where
		F: Fn() -> RouterResult<Page> + Send + Sync + 'static,
	{
		Self {
			inner: Arc::new(render),
		}
	}

	/// Creates a render target from an infallible view function.
	///
	/// ```
	/// use guarded_routes_core::RenderTarget;
	///
	/// let home = RenderTarget::from_fn(|| "Home");
	/// assert_eq!(home.render().unwrap().render_to_string(), "Home");
	/// ```
	pub fn from_fn<F, V>(view: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: IntoPage,
	{
		Self::new(move || Ok(view().into_page()))
	}

	/// Creates a render target for static content.
	///
	/// ```
	/// use guarded_routes_core::{PageElement, RenderTarget};
	///
	/// let login = RenderTarget::page(PageElement::new("h1").child("Sign in"));
	/// assert_eq!(login.render().unwrap().render_to_string(), "<h1>Sign in</h1>");
	/// ```
	pub fn page<V>(content: V) -> Self
	where
		V: IntoPage + Clone + Send + Sync + 'static,
	{
		Self::new(move || Ok(content.clone().into_page()))
	}

	/// Creates a render target that renders the given component.
	pub fn from_component<C: Component>(component: C) -> Self {
		Self::new(move || component.render())
	}

	/// Renders the target.
	pub fn render(&self) -> RouterResult<Page> {
		(self.inner)()
	}

	/// Returns whether both targets share the same closure.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl std::fmt::Debug for RenderTarget {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderTarget")
			.field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::RouterError;
	use crate::page::PageElement;
	use rstest::rstest;

	struct Greeting {
		name: String,
	}

	impl Component for Greeting {
		fn render(&self) -> Result<Page, RouterError> {
			Ok(PageElement::new("p")
				.child(format!("Hello, {}!", self.name))
				.into_page())
		}

		fn name() -> &'static str {
			"Greeting"
		}
	}

	#[rstest]
	fn test_from_component() {
		let target = RenderTarget::from_component(Greeting {
			name: "World".to_string(),
		});
		assert_eq!(
			target.render().unwrap().render_to_string(),
			"<p>Hello, World!</p>"
		);
	}

	#[rstest]
	fn test_render_error_propagates() {
		let target = RenderTarget::new(|| Err(RouterError::Render("boom".to_string())));
		assert_eq!(
			target.render(),
			Err(RouterError::Render("boom".to_string()))
		);
	}

	#[rstest]
	fn test_ptr_eq() {
		let home = RenderTarget::from_fn(|| "Home");
		let same = home.clone();
		let other = RenderTarget::from_fn(|| "Home");

		assert!(home.ptr_eq(&same));
		assert!(!home.ptr_eq(&other));
	}

	#[rstest]
	#[case(RenderTarget::page("Home"), "Home")]
	#[case(RenderTarget::page(String::from("a & b")), "a &amp; b")]
	#[case(RenderTarget::page(PageElement::new("br")), "<br>")]
	#[case(RenderTarget::page(()), "")]
	fn test_page(#[case] target: RenderTarget, #[case] expected: &str) {
		assert_eq!(target.render().unwrap().render_to_string(), expected);
		assert_eq!(target.render().unwrap().render_to_string(), expected);
	}

	#[rstest]
	fn test_render_is_repeatable() {
		let target = RenderTarget::from_fn(|| vec![Page::text("a"), Page::text("b")]);
		assert_eq!(target.render().unwrap().render_to_string(), "ab");
		assert_eq!(target.render().unwrap().render_to_string(), "ab");
	}
}
