//! Ponte bridge — engine-agnostic value contract for embedded script engines
//!
//! This crate defines the seam at which native code and an embedded scripting
//! engine meet: a uniform interface to test, construct, and convert values of
//! the engine's dynamic type system. Each supported engine supplies one
//! implementation of [`ValueBridge`] on its context type; calling code
//! depends only on the trait and stays engine-agnostic.
//!
//! The contract moves a small fixed set of native semantic types across the
//! boundary — boolean, number, string, binary blob, null, undefined, date,
//! object, callable — and nothing else. Binary results keep the
//! borrowed-vs-owned distinction visible through [`Binary`].
//!
//! # Example
//!
//! ```ignore
//! use ponte_bridge::{ValueBridge, ValueKind};
//!
//! fn summarize<B: ValueBridge>(ctx: &B, value: &B::Value) -> String {
//!     match ctx.kind(value) {
//!         ValueKind::Number => format!("number {}", ctx.to_string(value)),
//!         ValueKind::Binary => format!("{} bytes", ctx.to_binary(value).map(|b| b.len()).unwrap_or(0)),
//!         other => other.to_string(),
//!     }
//! }
//! ```

#![warn(missing_docs)]

pub mod binary;
pub mod bridge;
pub mod convert;
pub mod error;
pub mod kind;

pub use binary::{Binary, BinaryView, OwnedBinary};
pub use bridge::ValueBridge;
pub use convert::{FromScript, ToScript};
pub use error::{BridgeError, BridgeResult};
pub use kind::ValueKind;
