//! distserve core library — resolution of frontend build output.
//!
//! `distserve-core` decides which file on disk answers a request for a
//! single-page application bundle and what content type it carries. It knows
//! nothing about HTTP; `distserve-web` wraps it in an axum server.
//!
//! # Modules
//!
//! - [`resolver`] — [`StaticResolver`]: asset lookup under `assets/` and the `index.html` shell fallback.
//! - [`mime`] — Extension → content type table ([`content_type_for`]).
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod error;
pub mod mime;
pub mod resolver;

pub use error::{CoreError, CoreResult};
pub use mime::{content_type_for, FALLBACK_CONTENT_TYPE, SHELL_CONTENT_TYPE};
pub use resolver::{FileKind, ResolvedFile, StaticResolver};
