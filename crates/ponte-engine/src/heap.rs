//! Heap value types of the reference engine.
//!
//! Handles share heap cells through `Rc`; the engine is single-threaded by
//! contract, so no value type here is `Send` or `Sync`.

use std::cell::{Cell, RefCell};
use std::ptr::NonNull;
use std::rc::Rc;

use ponte_bridge::BinaryView;
use rustc_hash::FxHashMap;

use crate::context::{EngineContext, EngineError};
use crate::value::ScriptValue;

// ============================================================================
// ByteBuffer
// ============================================================================

/// Fixed-size byte storage shared between handles.
///
/// Storage is `Cell`-based so the engine can write through any handle without
/// a borrow guard. The allocation never moves or resizes, which is what keeps
/// borrowed binary views valid while their source handle is alive.
#[derive(PartialEq)]
pub struct ByteBuffer {
    cells: Box<[Cell<u8>]>,
}

impl ByteBuffer {
    /// Allocate a zero-filled buffer of the given size
    pub fn zeroed(len: usize) -> Self {
        Self {
            cells: vec![Cell::new(0); len].into_boxed_slice(),
        }
    }

    /// Allocate a buffer holding a copy of the given bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            cells: data.iter().map(|&b| Cell::new(b)).collect(),
        }
    }

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Byte at index
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells.get(index).map(Cell::get)
    }

    /// Write bytes starting at `offset`
    pub fn write(&self, offset: usize, bytes: &[u8]) -> Result<(), EngineError> {
        let end = offset
            .checked_add(bytes.len())
            .filter(|&end| end <= self.cells.len())
            .ok_or(EngineError::OutOfBounds {
                offset,
                length: bytes.len(),
                capacity: self.cells.len(),
            })?;
        for (cell, &byte) in self.cells[offset..end].iter().zip(bytes) {
            cell.set(byte);
        }
        Ok(())
    }

    /// Copy a byte range out of the buffer
    pub fn copy_range(&self, offset: usize, length: usize) -> Result<Vec<u8>, EngineError> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= self.cells.len())
            .ok_or(EngineError::OutOfBounds {
                offset,
                length,
                capacity: self.cells.len(),
            })?;
        Ok(self.cells[offset..end].iter().map(Cell::get).collect())
    }

    /// Base address of the storage. Non-null even for an empty buffer.
    pub fn base_ptr(&self) -> NonNull<u8> {
        // Cell<u8> has the layout of u8.
        let ptr = self.cells.as_ptr() as *const u8 as *mut u8;
        NonNull::new(ptr).unwrap_or(NonNull::dangling())
    }

    /// Zero-copy view over the whole buffer.
    ///
    /// The view aliases live engine storage and observes later writes. Safe
    /// reads (`BinaryView::to_vec`) copy through the raw base pointer; the
    /// slice accessor is unsafe because storage stays engine-mutable.
    pub fn as_view(&self) -> BinaryView<'_> {
        // Storage is address-stable for the borrow and readable for len bytes.
        unsafe { BinaryView::from_raw_parts(self.base_ptr(), self.len()) }
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer").field("len", &self.len()).finish()
    }
}

// ============================================================================
// BufferView
// ============================================================================

/// Byte window into a backing [`ByteBuffer`].
///
/// A view may sit at a non-zero offset inside a larger buffer, so extracting
/// its bytes always copies the logical window rather than borrowing.
#[derive(Debug, PartialEq)]
pub struct BufferView {
    buffer: Rc<ByteBuffer>,
    byte_offset: usize,
    byte_length: usize,
}

impl BufferView {
    /// Create a view over `buffer`; the window must lie within the buffer.
    pub fn new(
        buffer: Rc<ByteBuffer>,
        byte_offset: usize,
        byte_length: usize,
    ) -> Result<Self, EngineError> {
        let in_bounds = byte_offset
            .checked_add(byte_length)
            .is_some_and(|end| end <= buffer.len());
        if !in_bounds {
            return Err(EngineError::OutOfBounds {
                offset: byte_offset,
                length: byte_length,
                capacity: buffer.len(),
            });
        }
        Ok(Self {
            buffer,
            byte_offset,
            byte_length,
        })
    }

    /// Offset of the window into the backing buffer
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Length of the window in bytes
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// The backing buffer
    pub fn buffer(&self) -> &Rc<ByteBuffer> {
        &self.buffer
    }

    /// Copy the window's bytes out of the backing buffer
    pub fn copy_contents(&self) -> Vec<u8> {
        // Window bounds were validated at construction; cannot fail.
        self.buffer
            .copy_range(self.byte_offset, self.byte_length)
            .unwrap_or_default()
    }

    /// Write bytes at an offset relative to the window
    pub fn write(&self, offset: usize, bytes: &[u8]) -> Result<(), EngineError> {
        let in_window = offset
            .checked_add(bytes.len())
            .is_some_and(|end| end <= self.byte_length);
        if !in_window {
            return Err(EngineError::OutOfBounds {
                offset,
                length: bytes.len(),
                capacity: self.byte_length,
            });
        }
        self.buffer.write(self.byte_offset + offset, bytes)
    }
}

// ============================================================================
// ScriptObject / ScriptArray
// ============================================================================

/// Plain engine object: a mutable property map
#[derive(Debug, Default, PartialEq)]
pub struct ScriptObject {
    properties: RefCell<FxHashMap<String, ScriptValue>>,
}

impl ScriptObject {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Property by name
    pub fn get(&self, name: &str) -> Option<ScriptValue> {
        self.properties.borrow().get(name).cloned()
    }

    /// Set a property
    pub fn set(&self, name: &str, value: ScriptValue) {
        self.properties.borrow_mut().insert(name.to_string(), value);
    }

    /// Whether a property exists
    pub fn contains(&self, name: &str) -> bool {
        self.properties.borrow().contains_key(name)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    /// Whether the object has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }
}

/// Engine array: a mutable element list
#[derive(Debug, Default, PartialEq)]
pub struct ScriptArray {
    elements: RefCell<Vec<ScriptValue>>,
}

impl ScriptArray {
    /// Create an empty array
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array holding clones of the given handles
    pub fn from_slice(items: &[ScriptValue]) -> Self {
        Self {
            elements: RefCell::new(items.to_vec()),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Whether the array is empty
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    /// Element at index
    pub fn get(&self, index: usize) -> Option<ScriptValue> {
        self.elements.borrow().get(index).cloned()
    }

    /// Append an element
    pub fn push(&self, value: ScriptValue) {
        self.elements.borrow_mut().push(value);
    }

    /// Clone out all element handles
    pub fn to_vec(&self) -> Vec<ScriptValue> {
        self.elements.borrow().clone()
    }
}

// ============================================================================
// ScriptFunction
// ============================================================================

/// Signature of a native function exposed to the engine
pub type NativeFn = fn(&EngineContext, &[ScriptValue]) -> ScriptValue;

/// Callable engine value backed by a native function
#[derive(PartialEq)]
pub struct ScriptFunction {
    name: String,
    body: NativeFn,
}

impl ScriptFunction {
    /// Create a named function
    pub fn new(name: &str, body: NativeFn) -> Self {
        Self {
            name: name.to_string(),
            body,
        }
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the function
    pub fn invoke(&self, ctx: &EngineContext, args: &[ScriptValue]) -> ScriptValue {
        (self.body)(ctx, args)
    }
}

impl std::fmt::Debug for ScriptFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptFunction").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_write_read() {
        let buf = ByteBuffer::zeroed(4);
        buf.write(1, &[7, 8]).unwrap();
        assert_eq!(buf.copy_range(0, 4).unwrap(), vec![0, 7, 8, 0]);
        assert_eq!(buf.get(2), Some(8));
        assert_eq!(buf.get(4), None);
    }

    #[test]
    fn test_buffer_write_out_of_bounds() {
        let buf = ByteBuffer::zeroed(2);
        assert!(buf.write(1, &[1, 2]).is_err());
        assert!(buf.write(usize::MAX, &[1]).is_err());
    }

    #[test]
    fn test_empty_buffer_base_ptr_non_null() {
        let buf = ByteBuffer::zeroed(0);
        assert!(!buf.base_ptr().as_ptr().is_null());
        assert_eq!(buf.as_view().len(), 0);
    }

    #[test]
    fn test_view_window_bounds() {
        let buf = Rc::new(ByteBuffer::from_bytes(&[0, 1, 2, 3, 4]));
        let view = BufferView::new(buf.clone(), 1, 3).unwrap();
        assert_eq!(view.copy_contents(), vec![1, 2, 3]);
        assert!(BufferView::new(buf, 3, 3).is_err());
    }

    #[test]
    fn test_view_write_is_window_relative() {
        let buf = Rc::new(ByteBuffer::from_bytes(&[0; 5]));
        let view = BufferView::new(buf.clone(), 2, 2).unwrap();
        view.write(0, &[9, 9]).unwrap();
        assert_eq!(buf.copy_range(0, 5).unwrap(), vec![0, 0, 9, 9, 0]);
        assert!(view.write(1, &[1, 1]).is_err());
    }
}
