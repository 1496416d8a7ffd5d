//! Shared utilities.
//!
//! - [`html`]: HTML escaping and the page shell used by the placeholder views

pub mod html;
