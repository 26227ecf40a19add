//! ValueBridge trait — the engine-agnostic value contract
//!
//! Defines the interface every script-engine backend implements. Native code
//! programs against this trait to classify, construct, and extract host
//! values without depending on any single engine's embedding API.

use crate::binary::Binary;
use crate::error::BridgeResult;
use crate::kind::ValueKind;

/// Polymorphic value operations over an opaque host-value handle.
///
/// Implemented by each backend's **context** type — the active execution
/// environment of the embedded engine — so every operation is context-scoped
/// through `&self`. The associated [`Value`](ValueBridge::Value) type is the
/// opaque handle to a value in the engine's managed heap; cloning a handle
/// clones the reference, never the heap value, and the bridge never extends
/// or shortens a handle's lifetime.
///
/// # Contract
///
/// - Every operation is stateless, synchronous, and side-effect free apart
///   from allocation in the constructors.
/// - Predicates are total: they never panic for any handle, including the
///   empty sentinel.
/// - Handles must come from the engine instance behind this context; passing
///   a handle from another instance is undefined behavior, not a checked
///   error.
/// - All operations must run on the thread that owns the engine context;
///   concurrent calls against one context are outside the contract.
///
/// # Failure channels
///
/// Exactly two operations fail with an error: [`to_number`] with
/// `InvalidArgument` when coercion yields NaN, and [`to_binary`] with
/// `TypeMismatch` when the source is not binary-capable. Object and callable
/// coercions signal failure by returning an invalid handle instead, checked
/// with [`is_valid`].
///
/// [`to_number`]: ValueBridge::to_number
/// [`to_binary`]: ValueBridge::to_binary
/// [`is_valid`]: ValueBridge::is_valid
pub trait ValueBridge {
    /// Opaque handle to a value in the engine's managed heap
    type Value: Clone;

    // ========================================================================
    // Classification
    // ========================================================================

    /// Whether the handle is a legitimate reference at all, as opposed to the
    /// empty/sentinel slot. Distinct from every kind predicate: a valid
    /// handle may denote a value of any kind, and the sentinel denotes none.
    ///
    /// Validity is a property of the handle alone, so no context is taken.
    fn is_valid(value: &Self::Value) -> bool;

    /// Whether the value is a boolean
    fn is_boolean(&self, value: &Self::Value) -> bool;

    /// Whether the value is a number
    fn is_number(&self, value: &Self::Value) -> bool;

    /// Whether the value is a string
    fn is_string(&self, value: &Self::Value) -> bool;

    /// Whether the value is the engine's null singleton
    fn is_null(&self, value: &Self::Value) -> bool;

    /// Whether the value is the engine's undefined singleton
    fn is_undefined(&self, value: &Self::Value) -> bool;

    /// Whether the value is object-shaped (arrays, dates, callables, and
    /// binary objects included)
    fn is_object(&self, value: &Self::Value) -> bool;

    /// Whether the value is a date
    fn is_date(&self, value: &Self::Value) -> bool;

    /// Whether the value is callable
    fn is_function(&self, value: &Self::Value) -> bool;

    /// Whether the value is usable as a constructor. Engines that do not
    /// distinguish constructors from plain callables answer as
    /// [`is_function`](ValueBridge::is_function) does.
    fn is_constructor(&self, value: &Self::Value) -> bool {
        self.is_function(value)
    }

    /// Whether the value is an array
    fn is_array(&self, value: &Self::Value) -> bool;

    /// Whether the value is a contiguous raw-byte buffer object
    fn is_array_buffer(&self, value: &Self::Value) -> bool;

    /// Whether the value is a typed view over a backing buffer
    fn is_array_buffer_view(&self, value: &Self::Value) -> bool;

    /// Whether the value is the engine-specific host byte-buffer
    /// representation. Backends without one keep the default.
    fn is_byte_buffer(&self, value: &Self::Value) -> bool {
        let _ = value;
        false
    }

    /// Whether the value is any binary-capable representation — the single
    /// check callers use before dispatching to
    /// [`to_binary`](ValueBridge::to_binary).
    fn is_binary(&self, value: &Self::Value) -> bool {
        self.is_array_buffer(value)
            || self.is_array_buffer_view(value)
            || self.is_byte_buffer(value)
    }

    /// Classify the value for diagnostics.
    ///
    /// Derived from the predicates in fixed priority order, so the most
    /// specific kind wins (a date is `Date`, not `Object`).
    fn kind(&self, value: &Self::Value) -> ValueKind {
        if !Self::is_valid(value) {
            ValueKind::Invalid
        } else if self.is_undefined(value) {
            ValueKind::Undefined
        } else if self.is_null(value) {
            ValueKind::Null
        } else if self.is_boolean(value) {
            ValueKind::Boolean
        } else if self.is_number(value) {
            ValueKind::Number
        } else if self.is_string(value) {
            ValueKind::String
        } else if self.is_date(value) {
            ValueKind::Date
        } else if self.is_array(value) {
            ValueKind::Array
        } else if self.is_function(value) {
            ValueKind::Function
        } else if self.is_binary(value) {
            ValueKind::Binary
        } else {
            ValueKind::Object
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Construct the canonical engine boolean
    fn from_boolean(&self, value: bool) -> Self::Value;

    /// Construct an engine number. No validation: NaN, infinities, and all
    /// finite values round-trip through the engine's numeric representation.
    fn from_number(&self, value: f64) -> Self::Value;

    /// Construct an engine string, preserving content losslessly
    fn from_string(&self, value: &str) -> Self::Value;

    /// Construct a fresh engine-managed binary buffer sized exactly to the
    /// input and holding a **copy** of its bytes. Zero-length input yields a
    /// valid empty buffer object, and the caller's slice is never referenced
    /// after the call returns.
    fn from_binary(&self, data: &[u8]) -> Self::Value;

    /// The engine's canonical null singleton
    fn from_null(&self) -> Self::Value;

    /// The engine's canonical undefined singleton
    fn from_undefined(&self) -> Self::Value;

    // ========================================================================
    // Extraction
    // ========================================================================

    /// Coerce to a boolean with the engine's truthiness rules. Total over the
    /// whole value space; an engine-side coercion failure reads as `false`.
    fn to_boolean(&self, value: &Self::Value) -> bool;

    /// Coerce to a number with the engine's numeric rules.
    ///
    /// Fails with `InvalidArgument` when the coercion result is NaN. A source
    /// that *is* the native NaN fails the same way — the contract does not
    /// distinguish the two.
    fn to_number(&self, value: &Self::Value) -> BridgeResult<f64>;

    /// Coerce to a string with the engine's rules; objects stringify via the
    /// engine's textual representation. Never fails.
    fn to_string(&self, value: &Self::Value) -> String;

    /// Coerce to an object-shaped handle, or an invalid handle on failure
    /// (check with [`is_valid`](ValueBridge::is_valid))
    fn to_object(&self, value: &Self::Value) -> Self::Value;

    /// Coerce to an array-shaped handle. Defined as
    /// [`to_object`](ValueBridge::to_object) at this layer; the array shape
    /// is enforced by higher-level wrapper types.
    fn to_array(&self, value: &Self::Value) -> Self::Value {
        self.to_object(value)
    }

    /// Coerce to a date-shaped handle. Defined as
    /// [`to_object`](ValueBridge::to_object) at this layer, like
    /// [`to_array`](ValueBridge::to_array).
    fn to_date(&self, value: &Self::Value) -> Self::Value {
        self.to_object(value)
    }

    /// The callable handle itself if the value is callable, else an invalid
    /// handle. No copy is made.
    fn to_function(&self, value: &Self::Value) -> Self::Value;

    /// Defined as [`to_function`](ValueBridge::to_function)
    fn to_constructor(&self, value: &Self::Value) -> Self::Value {
        self.to_function(value)
    }

    /// Extract binary data, dispatching on the source representation:
    ///
    /// 1. contiguous raw-byte buffer → borrowed view, zero-copy;
    /// 2. typed buffer view → owned copy of the view's logical window (a
    ///    view may alias a larger buffer at an offset);
    /// 3. host byte buffer → borrowed view, zero-copy;
    /// 4. anything else → `TypeMismatch`.
    ///
    /// Every successful result has a non-null base pointer, length zero
    /// included.
    fn to_binary<'a>(&self, value: &'a Self::Value) -> BridgeResult<Binary<'a>>;
}
