//! EngineContext — execution context of the reference engine
//!
//! Owns the allocation entry points and a running tally of heap bytes
//! allocated through it. The context is the engine's side of the bridge: the
//! [`ValueBridge`](ponte_bridge::ValueBridge) impl lives on this type, and
//! embedders reach engine-specific surface (views, object properties,
//! engine-side buffer writes) through its inherent methods.
//!
//! Not `Send` or `Sync`: the engine is single-threaded by contract, and all
//! operations on a context must stay on the thread that created it.

use std::cell::Cell;
use std::rc::Rc;

use crate::heap::{BufferView, ByteBuffer, NativeFn, ScriptArray, ScriptFunction, ScriptObject};
use crate::value::{Repr, ScriptValue};

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from engine-side operations (distinct from bridge failures)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A byte range does not fit the addressed storage
    #[error("byte range {offset}+{length} out of bounds (capacity {capacity})")]
    OutOfBounds {
        /// Start of the range
        offset: usize,
        /// Length of the range
        length: usize,
        /// Size of the addressed storage
        capacity: usize,
    },

    /// The value has no byte storage behind it
    #[error("expected a buffer-backed value, got {0}")]
    NotABuffer(&'static str),

    /// The value is not callable
    #[error("value is not callable: {0}")]
    NotCallable(&'static str),
}

/// Execution context of the reference engine.
///
/// All heap values reachable from a context's handles are `Rc`-shared;
/// dropping the last handle to a value releases it.
pub struct EngineContext {
    /// Bytes of string/buffer storage allocated through this context
    heap_bytes: Cell<usize>,
}

impl EngineContext {
    /// Create a fresh context
    pub fn new() -> Self {
        Self {
            heap_bytes: Cell::new(0),
        }
    }

    /// Total bytes of string and buffer storage allocated through this
    /// context so far
    pub fn heap_bytes(&self) -> usize {
        self.heap_bytes.get()
    }

    fn track(&self, bytes: usize) {
        self.heap_bytes.set(self.heap_bytes.get().saturating_add(bytes));
    }

    // ========================================================================
    // Allocation
    // ========================================================================

    /// Allocate an array buffer holding a copy of `data`
    pub fn alloc_buffer(&self, data: &[u8]) -> ScriptValue {
        self.track(data.len());
        ScriptValue::from_repr(Repr::ArrayBuffer(Rc::new(ByteBuffer::from_bytes(data))))
    }

    /// Allocate a zero-filled array buffer
    pub fn alloc_buffer_zeroed(&self, len: usize) -> ScriptValue {
        self.track(len);
        ScriptValue::from_repr(Repr::ArrayBuffer(Rc::new(ByteBuffer::zeroed(len))))
    }

    /// Allocate a host byte buffer holding a copy of `data`
    pub fn alloc_bytes(&self, data: &[u8]) -> ScriptValue {
        self.track(data.len());
        ScriptValue::from_repr(Repr::Bytes(Rc::new(ByteBuffer::from_bytes(data))))
    }

    /// Allocate an engine string
    pub fn alloc_string(&self, s: &str) -> ScriptValue {
        self.track(s.len());
        ScriptValue::from_repr(Repr::String(Rc::from(s)))
    }

    /// Create a view over an array buffer's storage window
    pub fn new_view(
        &self,
        buffer: &ScriptValue,
        byte_offset: usize,
        byte_length: usize,
    ) -> EngineResult<ScriptValue> {
        match buffer.repr() {
            Repr::ArrayBuffer(buf) => {
                let view = BufferView::new(buf.clone(), byte_offset, byte_length)?;
                Ok(ScriptValue::from_repr(Repr::View(Rc::new(view))))
            }
            _ => Err(EngineError::NotABuffer(buffer.type_name())),
        }
    }

    /// Create an empty object
    pub fn new_object(&self) -> ScriptValue {
        ScriptValue::from_repr(Repr::Object(Rc::new(ScriptObject::new())))
    }

    /// Create an array holding the given elements
    pub fn new_array(&self, items: &[ScriptValue]) -> ScriptValue {
        ScriptValue::from_repr(Repr::Array(Rc::new(ScriptArray::from_slice(items))))
    }

    /// Create a named callable backed by a native function
    pub fn new_function(&self, name: &str, body: NativeFn) -> ScriptValue {
        ScriptValue::from_repr(Repr::Function(Rc::new(ScriptFunction::new(name, body))))
    }

    /// Create a date from epoch milliseconds
    pub fn new_date(&self, epoch_ms: f64) -> ScriptValue {
        ScriptValue::from_repr(Repr::Date(epoch_ms))
    }

    // ========================================================================
    // Engine-side operations
    // ========================================================================

    /// Invoke a callable value
    pub fn call(&self, callee: &ScriptValue, args: &[ScriptValue]) -> EngineResult<ScriptValue> {
        match callee.repr() {
            Repr::Function(func) => Ok(func.invoke(self, args)),
            _ => Err(EngineError::NotCallable(callee.type_name())),
        }
    }

    /// Write bytes into a buffer-backed value.
    ///
    /// For a buffer view the offset is relative to the view's window and
    /// bounds-checked against it, so a view cannot write outside its slice.
    pub fn buffer_write(
        &self,
        target: &ScriptValue,
        offset: usize,
        bytes: &[u8],
    ) -> EngineResult<()> {
        match target.repr() {
            Repr::ArrayBuffer(buf) | Repr::Bytes(buf) => buf.write(offset, bytes),
            Repr::View(view) => view.write(offset, bytes),
            _ => Err(EngineError::NotABuffer(target.type_name())),
        }
    }

    /// Get an object property
    pub fn object_get(&self, object: &ScriptValue, name: &str) -> Option<ScriptValue> {
        match object.repr() {
            Repr::Object(obj) => obj.get(name),
            _ => None,
        }
    }

    /// Set an object property; no-op for non-objects
    pub fn object_set(&self, object: &ScriptValue, name: &str, value: ScriptValue) {
        if let Repr::Object(obj) = object.repr() {
            obj.set(name, value);
        }
    }

    /// Array length, or 0 for non-arrays
    pub fn array_len(&self, array: &ScriptValue) -> usize {
        match array.repr() {
            Repr::Array(arr) => arr.len(),
            _ => 0,
        }
    }

    /// Array element at index
    pub fn array_get(&self, array: &ScriptValue, index: usize) -> Option<ScriptValue> {
        match array.repr() {
            Repr::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Append to an array; no-op for non-arrays
    pub fn array_push(&self, array: &ScriptValue, value: ScriptValue) {
        if let Repr::Array(arr) = array.repr() {
            arr.push(value);
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_tracks_heap_bytes() {
        let ctx = EngineContext::new();
        ctx.alloc_buffer(&[1, 2, 3]);
        ctx.alloc_string("abcd");
        assert_eq!(ctx.heap_bytes(), 7);
    }

    #[test]
    fn test_new_view_requires_array_buffer() {
        let ctx = EngineContext::new();
        let buf = ctx.alloc_buffer(&[0; 8]);
        assert!(ctx.new_view(&buf, 2, 4).is_ok());
        assert!(ctx.new_view(&buf, 6, 4).is_err());

        let s = ctx.alloc_string("not a buffer");
        assert_eq!(
            ctx.new_view(&s, 0, 0),
            Err(EngineError::NotABuffer("string"))
        );
    }

    #[test]
    fn test_call_dispatches_to_native_fn() {
        let ctx = EngineContext::new();
        let func = ctx.new_function("count_args", |ctx, args| {
            ctx.new_date(args.len() as f64)
        });
        let result = ctx.call(&func, &[ctx.new_object(), ctx.new_object()]).unwrap();
        assert!(matches!(result.repr(), Repr::Date(n) if *n == 2.0));

        let err = ctx.call(&ctx.new_object(), &[]).unwrap_err();
        assert_eq!(err, EngineError::NotCallable("object"));
    }

    #[test]
    fn test_buffer_write_through_view_is_window_bounded() {
        let ctx = EngineContext::new();
        let buf = ctx.alloc_buffer(&[0; 6]);
        let view = ctx.new_view(&buf, 2, 2).unwrap();
        ctx.buffer_write(&view, 0, &[5, 5]).unwrap();
        assert!(ctx.buffer_write(&view, 1, &[1, 1]).is_err());
    }

    #[test]
    fn test_object_and_array_ops() {
        let ctx = EngineContext::new();
        let obj = ctx.new_object();
        ctx.object_set(&obj, "answer", ctx.new_date(42.0));
        assert!(ctx.object_get(&obj, "answer").is_some());
        assert!(ctx.object_get(&obj, "missing").is_none());

        let arr = ctx.new_array(&[]);
        ctx.array_push(&arr, obj);
        assert_eq!(ctx.array_len(&arr), 1);
        assert!(ctx.array_get(&arr, 0).is_some());
    }
}
