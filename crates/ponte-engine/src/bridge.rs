//! ValueBridge implementation for the reference engine.
//!
//! Wires the engine's repr tags, allocator, and coercion rules onto the
//! contract. Predicates dispatch on the repr; constructors allocate through
//! the context; binary extraction borrows buffer storage directly and copies
//! a view's logical window.

use ponte_bridge::{Binary, BridgeError, BridgeResult, OwnedBinary, ValueBridge};

use crate::coerce;
use crate::context::EngineContext;
use crate::value::{Repr, ScriptValue};

impl ValueBridge for EngineContext {
    type Value = ScriptValue;

    // ========================================================================
    // Classification
    // ========================================================================

    fn is_valid(value: &ScriptValue) -> bool {
        value.is_valid()
    }

    fn is_boolean(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Bool(_))
    }

    fn is_number(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Number(_))
    }

    fn is_string(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::String(_))
    }

    fn is_null(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Null)
    }

    fn is_undefined(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Undefined)
    }

    fn is_object(&self, value: &ScriptValue) -> bool {
        matches!(
            value.repr(),
            Repr::Object(_)
                | Repr::Array(_)
                | Repr::Date(_)
                | Repr::Function(_)
                | Repr::ArrayBuffer(_)
                | Repr::View(_)
                | Repr::Bytes(_)
        )
    }

    fn is_date(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Date(_))
    }

    fn is_function(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Function(_))
    }

    fn is_array(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Array(_))
    }

    fn is_array_buffer(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::ArrayBuffer(_))
    }

    fn is_array_buffer_view(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::View(_))
    }

    fn is_byte_buffer(&self, value: &ScriptValue) -> bool {
        matches!(value.repr(), Repr::Bytes(_))
    }

    // ========================================================================
    // Construction
    // ========================================================================

    fn from_boolean(&self, value: bool) -> ScriptValue {
        ScriptValue::from_repr(Repr::Bool(value))
    }

    fn from_number(&self, value: f64) -> ScriptValue {
        ScriptValue::from_repr(Repr::Number(value))
    }

    fn from_string(&self, value: &str) -> ScriptValue {
        self.alloc_string(value)
    }

    fn from_binary(&self, data: &[u8]) -> ScriptValue {
        self.alloc_buffer(data)
    }

    fn from_null(&self) -> ScriptValue {
        ScriptValue::from_repr(Repr::Null)
    }

    fn from_undefined(&self) -> ScriptValue {
        ScriptValue::from_repr(Repr::Undefined)
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    fn to_boolean(&self, value: &ScriptValue) -> bool {
        coerce::truthy(value)
    }

    fn to_number(&self, value: &ScriptValue) -> BridgeResult<f64> {
        let n = coerce::number(value);
        if n.is_nan() {
            // A source that is the native NaN fails here too; the contract
            // does not tell the two cases apart.
            Err(BridgeError::invalid_argument(format!(
                "numeric coercion of {} produced NaN",
                value.type_name()
            )))
        } else {
            Ok(n)
        }
    }

    fn to_string(&self, value: &ScriptValue) -> String {
        coerce::text(value)
    }

    fn to_object(&self, value: &ScriptValue) -> ScriptValue {
        if self.is_object(value) {
            value.clone()
        } else {
            ScriptValue::empty()
        }
    }

    fn to_function(&self, value: &ScriptValue) -> ScriptValue {
        if self.is_function(value) {
            value.clone()
        } else {
            ScriptValue::empty()
        }
    }

    fn to_binary<'a>(&self, value: &'a ScriptValue) -> BridgeResult<Binary<'a>> {
        match value.repr() {
            // Contiguous engine storage: zero-copy borrow, alive as long as
            // the source handle.
            Repr::ArrayBuffer(buf) | Repr::Bytes(buf) => Ok(Binary::Borrowed(buf.as_view())),
            // A view may sit at an offset inside a larger backing buffer, so
            // its logical window is materialized as an owned copy.
            Repr::View(view) => Ok(Binary::Owned(OwnedBinary::from_vec(view.copy_contents()))),
            _ => Err(BridgeError::type_mismatch(
                "array buffer, buffer view, or byte buffer",
                self.kind(value).to_string(),
            )),
        }
    }
}
