//! Ponte reference engine — a complete backend for the value bridge
//!
//! A small single-threaded dynamic-value engine whose context implements
//! [`ponte_bridge::ValueBridge`]. It exists to give the contract one full
//! specialization: every native semantic type, all three binary-capable
//! representations (array buffers, offset views over a backing buffer, host
//! byte buffers), and JS-style coercion rules.
//!
//! # Example
//!
//! ```ignore
//! use ponte_bridge::ValueBridge;
//! use ponte_engine::EngineContext;
//!
//! let ctx = EngineContext::new();
//! let value = ctx.from_number(1.5);
//! assert!(ctx.is_number(&value));
//! assert_eq!(ctx.to_number(&value).unwrap(), 1.5);
//! ```

pub mod context;
pub mod heap;
pub mod value;

mod bridge;
mod coerce;

pub use context::{EngineContext, EngineError, EngineResult};
pub use heap::{BufferView, ByteBuffer, NativeFn, ScriptArray, ScriptFunction, ScriptObject};
pub use value::ScriptValue;
