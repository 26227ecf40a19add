//! Binary extraction: ownership dispatch, copy independence, and the
//! non-null base pointer invariant

use ponte_bridge::{BridgeError, ValueBridge};
use ponte_engine::{EngineContext, ScriptValue};

#[test]
fn binary_round_trip() {
    let ctx = EngineContext::new();
    for bytes in [&[][..], &[0][..], &[1, 2, 3, 255][..]] {
        let value = ctx.from_binary(bytes);
        assert!(ScriptValue::is_valid(&value));
        let binary = ctx.to_binary(&value).unwrap();
        assert_eq!(binary.to_vec(), bytes);
        assert!(!binary.as_ptr().as_ptr().is_null());
    }
}

#[test]
fn zero_length_extraction_has_non_null_base() {
    let ctx = EngineContext::new();
    let empty_buffer = ctx.from_binary(&[]);
    let binary = ctx.to_binary(&empty_buffer).unwrap();
    assert_eq!(binary.len(), 0);
    assert!(binary.is_empty());
    assert!(!binary.as_ptr().as_ptr().is_null());

    // Same invariant on the owned path, through a zero-length view.
    let backing = ctx.from_binary(&[1, 2, 3]);
    let view = ctx.new_view(&backing, 1, 0).unwrap();
    let binary = ctx.to_binary(&view).unwrap();
    assert!(binary.is_owned());
    assert_eq!(binary.len(), 0);
    assert!(!binary.as_ptr().as_ptr().is_null());
}

#[test]
fn array_buffer_extraction_is_borrowed() {
    let ctx = EngineContext::new();
    let value = ctx.from_binary(&[10, 20, 30]);
    let binary = ctx.to_binary(&value).unwrap();
    assert!(binary.is_borrowed());
    assert_eq!(binary.to_vec(), vec![10, 20, 30]);
}

#[test]
fn byte_buffer_extraction_is_borrowed() {
    let ctx = EngineContext::new();
    let value = ctx.alloc_bytes(&[7, 7, 7]);
    let binary = ctx.to_binary(&value).unwrap();
    assert!(binary.is_borrowed());
    assert_eq!(binary.to_vec(), vec![7, 7, 7]);
}

#[test]
fn borrowed_extraction_observes_engine_writes() {
    let ctx = EngineContext::new();
    let value = ctx.from_binary(&[0, 0]);
    // Holding a borrowed result across an engine write is allowed: safe
    // reads copy through the raw base pointer at call time, so the copy
    // sees the current bytes and no reference aliases the written storage.
    let binary = ctx.to_binary(&value).unwrap();
    assert!(binary.is_borrowed());
    ctx.buffer_write(&value, 0, &[8, 9]).unwrap();
    assert_eq!(binary.to_vec(), vec![8, 9]);
}

#[test]
fn view_extraction_copies_the_logical_window() {
    let ctx = EngineContext::new();
    // Bytes [1,2,3] at a non-zero offset into a larger backing buffer.
    let backing = ctx.from_binary(&[0, 1, 2, 3, 4]);
    let view = ctx.new_view(&backing, 1, 3).unwrap();

    let binary = ctx.to_binary(&view).unwrap();
    assert!(binary.is_owned());
    assert_eq!(binary.to_vec(), vec![1, 2, 3]);

    // The copy is independent of later mutation of the backing buffer.
    let owned = binary.into_owned();
    ctx.buffer_write(&backing, 0, &[9, 9, 9, 9, 9]).unwrap();
    assert_eq!(owned.as_bytes(), &[1, 2, 3]);
}

#[test]
fn from_binary_copies_and_never_aliases() {
    let ctx = EngineContext::new();
    let source = [1u8, 2, 3];

    // Two handles from one source share nothing.
    let first = ctx.from_binary(&source);
    let second = ctx.from_binary(&source);
    ctx.buffer_write(&first, 0, &[100, 100, 100]).unwrap();

    assert_eq!(ctx.to_binary(&first).unwrap().to_vec(), vec![100, 100, 100]);
    assert_eq!(ctx.to_binary(&second).unwrap().to_vec(), vec![1, 2, 3]);
    // And the caller's source buffer is untouched.
    assert_eq!(source, [1, 2, 3]);
}

#[test]
fn non_binary_sources_fail_with_type_mismatch() {
    let ctx = EngineContext::new();
    let rejected = [
        ctx.from_boolean(true),
        ctx.from_number(0.0),
        ctx.from_string("0xff"),
        ctx.from_null(),
        ctx.from_undefined(),
        ctx.new_object(),
        ctx.new_array(&[ctx.from_number(1.0)]),
        ctx.new_date(0.0),
        ScriptValue::empty(),
    ];
    for value in &rejected {
        let err = ctx.to_binary(value).unwrap_err();
        assert!(
            matches!(err, BridgeError::TypeMismatch { .. }),
            "{:?} -> {}",
            value,
            err
        );
    }
}

#[test]
fn type_mismatch_names_the_actual_kind() {
    let ctx = EngineContext::new();
    let err = ctx.to_binary(&ctx.from_string("s")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: expected array buffer, buffer view, or byte buffer, got string"
    );
    // The reported kind comes from the classification used everywhere else,
    // the empty sentinel included.
    let err = ctx.to_binary(&ScriptValue::empty()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch: expected array buffer, buffer view, or byte buffer, got invalid"
    );
}

#[test]
fn owned_copy_transfers_to_caller_container() {
    let ctx = EngineContext::new();
    let backing = ctx.from_binary(&[4, 5, 6, 7]);
    let view = ctx.new_view(&backing, 2, 2).unwrap();
    let bytes = ctx.to_binary(&view).unwrap().into_owned().into_vec();
    assert_eq!(bytes, vec![6, 7]);
}
