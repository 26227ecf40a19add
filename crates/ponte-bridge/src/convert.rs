//! Traits for converting between Rust types and host values.
//!
//! Implemented for the primitive types the bridge moves across the boundary;
//! generic over the backend, so a conversion written once works against any
//! engine.
//!
//! # Example
//!
//! ```ignore
//! use ponte_bridge::{FromScript, ToScript, ValueBridge};
//!
//! fn echo_number<B: ValueBridge>(ctx: &B, value: &B::Value) -> ponte_bridge::BridgeResult<B::Value> {
//!     let n = f64::from_script(ctx, value)?;
//!     Ok((n * 2.0).to_script(ctx))
//! }
//! ```

use crate::bridge::ValueBridge;
use crate::error::BridgeResult;

/// Convert a Rust value into a host value through a backend context.
pub trait ToScript<B: ValueBridge + ?Sized> {
    /// Construct the host value
    fn to_script(&self, ctx: &B) -> B::Value;
}

/// Extract a Rust value from a host value through a backend context.
///
/// Conversions that are total in the contract (`bool`, `String`) never
/// return an error; the fallible ones propagate the bridge's own failures.
pub trait FromScript<B: ValueBridge + ?Sized>: Sized {
    /// Extract the Rust value
    fn from_script(ctx: &B, value: &B::Value) -> BridgeResult<Self>;
}

// ============================================================================
// Primitive implementations
// ============================================================================

impl<B: ValueBridge + ?Sized> ToScript<B> for bool {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_boolean(*self)
    }
}

impl<B: ValueBridge + ?Sized> FromScript<B> for bool {
    fn from_script(ctx: &B, value: &B::Value) -> BridgeResult<Self> {
        Ok(ctx.to_boolean(value))
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for f64 {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_number(*self)
    }
}

impl<B: ValueBridge + ?Sized> FromScript<B> for f64 {
    fn from_script(ctx: &B, value: &B::Value) -> BridgeResult<Self> {
        ctx.to_number(value)
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for str {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_string(self)
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for &str {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_string(self)
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for String {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_string(self)
    }
}

impl<B: ValueBridge + ?Sized> FromScript<B> for String {
    fn from_script(ctx: &B, value: &B::Value) -> BridgeResult<Self> {
        Ok(ctx.to_string(value))
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for [u8] {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_binary(self)
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for &[u8] {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_binary(self)
    }
}

impl<B: ValueBridge + ?Sized> ToScript<B> for Vec<u8> {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_binary(self)
    }
}

impl<B: ValueBridge + ?Sized> FromScript<B> for Vec<u8> {
    fn from_script(ctx: &B, value: &B::Value) -> BridgeResult<Self> {
        Ok(ctx.to_binary(value)?.into_owned().into_vec())
    }
}

// Unit maps to undefined (a void return carries no value)
impl<B: ValueBridge + ?Sized> ToScript<B> for () {
    fn to_script(&self, ctx: &B) -> B::Value {
        ctx.from_undefined()
    }
}

// None maps to null
impl<B: ValueBridge + ?Sized, T: ToScript<B>> ToScript<B> for Option<T> {
    fn to_script(&self, ctx: &B) -> B::Value {
        match self {
            Some(inner) => inner.to_script(ctx),
            None => ctx.from_null(),
        }
    }
}
