//! Page tree and the IntoPage conversion trait.
//!
//! A [`Page`] is what a render target produces. Besides ordinary markup it
//! can carry a [`Navigate`] instruction, which the host router executes
//! instead of mounting content.

use crate::navigate::Navigate;
use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple pages (no wrapper element).
	Fragment(Vec<Page>),
	/// A navigation instruction replacing the content.
	Redirect(Navigate),
	/// An empty page (renders nothing).
	#[default]
	Empty,
}

impl Page {
	/// Creates a text page.
	pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(text.into())
	}

	/// Creates a fragment page.
	pub fn fragment(children: impl IntoIterator<Item = Page>) -> Self {
		Self::Fragment(children.into_iter().collect())
	}

	/// Creates an empty page.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns whether this page renders nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			Self::Empty => true,
			Self::Fragment(children) => children.iter().all(Page::is_empty),
			_ => false,
		}
	}

	/// Returns the navigation instruction if this page is a redirect.
	pub fn as_redirect(&self) -> Option<&Navigate> {
		match self {
			Self::Redirect(navigate) => Some(navigate),
			_ => None,
		}
	}

	/// Renders the page to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	fn write_html(&self, out: &mut String) {
		match self {
			Self::Element(el) => el.write_html(out),
			Self::Text(text) => out.push_str(&escape_html(text)),
			Self::Fragment(children) => {
				for child in children {
					child.write_html(out);
				}
			}
			Self::Redirect(navigate) => navigate.to_element().write_html(out),
			Self::Empty => {}
		}
	}
}

/// Represents a DOM element in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child pages.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child page.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	fn write_html(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.tag);
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&escape_html(value));
			out.push('"');
		}
		out.push('>');

		if self.is_void {
			return;
		}

		for child in &self.children {
			child.write_html(out);
		}
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
	}
}

fn escape_html(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Conversion into a [`Page`].
pub trait IntoPage {
	/// Converts self into a page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for Navigate {
	fn into_page(self) -> Page {
		Page::Redirect(self)
	}
}

impl IntoPage for Vec<Page> {
	fn into_page(self) -> Page {
		Page::Fragment(self)
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}
