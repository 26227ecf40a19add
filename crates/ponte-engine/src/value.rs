//! ScriptValue — opaque handle to an engine value
//!
//! A handle either denotes a value on the engine heap or is the empty
//! sentinel. Cloning a handle clones the reference; heap data is shared, so
//! two clones of a buffer handle observe the same bytes.

use std::rc::Rc;

use crate::heap::{BufferView, ByteBuffer, ScriptArray, ScriptFunction, ScriptObject};

/// Opaque handle to a value in the reference engine.
///
/// Obtained from [`EngineContext`](crate::EngineContext) allocation methods
/// or from bridge construction operations; classified and converted through
/// the [`ValueBridge`](ponte_bridge::ValueBridge) impl on the context.
#[derive(Clone, PartialEq)]
pub struct ScriptValue {
    repr: Repr,
}

/// Internal representation. Heap shapes hold an `Rc` to shared storage.
#[derive(Clone, PartialEq)]
pub(crate) enum Repr {
    /// The empty/no-value sentinel
    Empty,
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    /// Contiguous raw-byte buffer object
    ArrayBuffer(Rc<ByteBuffer>),
    /// Typed window over a backing buffer
    View(Rc<BufferView>),
    /// Host byte buffer (same storage as an array buffer, distinct shape)
    Bytes(Rc<ByteBuffer>),
    /// Epoch milliseconds
    Date(f64),
    Array(Rc<ScriptArray>),
    Object(Rc<ScriptObject>),
    Function(Rc<ScriptFunction>),
}

impl ScriptValue {
    pub(crate) fn from_repr(repr: Repr) -> Self {
        Self { repr }
    }

    pub(crate) fn repr(&self) -> &Repr {
        &self.repr
    }

    /// The empty sentinel: a handle that denotes no value at all
    pub fn empty() -> Self {
        Self { repr: Repr::Empty }
    }

    /// Whether the handle denotes a value (false only for the sentinel)
    pub fn is_valid(&self) -> bool {
        !matches!(self.repr, Repr::Empty)
    }

    /// Name of the value's representation, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match &self.repr {
            Repr::Empty => "invalid",
            Repr::Undefined => "undefined",
            Repr::Null => "null",
            Repr::Bool(_) => "boolean",
            Repr::Number(_) => "number",
            Repr::String(_) => "string",
            Repr::ArrayBuffer(_) => "array buffer",
            Repr::View(_) => "buffer view",
            Repr::Bytes(_) => "byte buffer",
            Repr::Date(_) => "date",
            Repr::Array(_) => "array",
            Repr::Object(_) => "object",
            Repr::Function(_) => "function",
        }
    }
}

impl Default for ScriptValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Empty => write!(f, "ScriptValue::Empty"),
            Repr::Undefined => write!(f, "ScriptValue::Undefined"),
            Repr::Null => write!(f, "ScriptValue::Null"),
            Repr::Bool(b) => write!(f, "ScriptValue::Bool({})", b),
            Repr::Number(n) => write!(f, "ScriptValue::Number({})", n),
            Repr::String(s) => write!(f, "ScriptValue::String({:?})", s),
            Repr::ArrayBuffer(b) => write!(f, "ScriptValue::ArrayBuffer(len={})", b.len()),
            Repr::View(v) => write!(
                f,
                "ScriptValue::View(offset={}, len={})",
                v.byte_offset(),
                v.byte_length()
            ),
            Repr::Bytes(b) => write!(f, "ScriptValue::Bytes(len={})", b.len()),
            Repr::Date(ms) => write!(f, "ScriptValue::Date({})", ms),
            Repr::Array(a) => write!(f, "ScriptValue::Array(len={})", a.len()),
            Repr::Object(o) => write!(f, "ScriptValue::Object(props={})", o.len()),
            Repr::Function(func) => write!(f, "ScriptValue::Function({})", func.name()),
        }
    }
}
