//! Guarded Routes Core - host-side primitives for route guards
//!
//! The guard layer sits on top of a client-side router and needs a small set
//! of things from it: something to render, a way to read the current
//! location, and a way to ask for a redirect. This crate defines those.
//!
//! ## Modules
//!
//! - [`page`]: The [`Page`] tree produced by rendering, and [`IntoPage`]
//! - [`component`]: The [`Component`] trait and shared [`RenderTarget`]s
//! - [`location`]: [`Location`] and the ambient location context
//! - [`navigate`]: The [`Navigate`] redirect primitive and [`NavigationState`]
//! - [`error`]: [`RouterError`]

#![warn(missing_docs)]

pub mod component;
pub mod error;
pub mod location;
pub mod navigate;
pub mod page;

pub use component::{Component, RenderTarget};
pub use error::{RouterError, RouterResult};
pub use location::{Location, LocationScope, provide_location, use_location, with_location};
pub use navigate::{Navigate, NavigationState};
pub use page::{IntoPage, Page, PageElement};
