//! A bespoke kit of tools, each built to solve one small problem.
//!
//! - [`casing`]: letter-casing rules for the converter page and the
//!   word-normalizing modes of the command line.
//! - [`color`]: color parsing and conversion between notations.
//! - [`net`]: local network address lookups.
//! - [`web`]: the landing page and the live case converter page.
pub mod casing;
pub mod color;
pub mod error;
pub mod net;
mod util;
#[cfg(feature = "server")]
pub mod web;

#[cfg(feature = "bin")]
#[doc(hidden)]
pub mod app;
