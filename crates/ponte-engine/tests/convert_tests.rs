//! Typed conversion traits exercised against the reference backend

use ponte_bridge::{FromScript, ToScript, ValueBridge};
use ponte_engine::EngineContext;

#[test]
fn primitive_round_trips() {
    let ctx = EngineContext::new();

    let value = true.to_script(&ctx);
    assert_eq!(bool::from_script(&ctx, &value).unwrap(), true);

    let value = 2.5f64.to_script(&ctx);
    assert_eq!(f64::from_script(&ctx, &value).unwrap(), 2.5);

    let value = "héllo".to_script(&ctx);
    assert_eq!(String::from_script(&ctx, &value).unwrap(), "héllo");

    let value = vec![1u8, 2, 3].to_script(&ctx);
    assert_eq!(Vec::<u8>::from_script(&ctx, &value).unwrap(), vec![1, 2, 3]);
}

#[test]
fn total_conversions_never_fail() {
    let ctx = EngineContext::new();
    let obj = ctx.new_object();
    assert_eq!(bool::from_script(&ctx, &obj).unwrap(), true);
    assert_eq!(String::from_script(&ctx, &obj).unwrap(), "[object Object]");
}

#[test]
fn fallible_conversions_propagate_bridge_errors() {
    let ctx = EngineContext::new();
    let obj = ctx.new_object();
    assert!(f64::from_script(&ctx, &obj).is_err());
    assert!(Vec::<u8>::from_script(&ctx, &obj).is_err());
}

#[test]
fn unit_and_option_map_to_singletons() {
    let ctx = EngineContext::new();
    assert!(ctx.is_undefined(&().to_script(&ctx)));
    assert!(ctx.is_null(&None::<f64>.to_script(&ctx)));
    assert!(ctx.is_number(&Some(1.0f64).to_script(&ctx)));
}

#[test]
fn string_conversion_coerces_numbers() {
    let ctx = EngineContext::new();
    let value = 3.0f64.to_script(&ctx);
    assert_eq!(String::from_script(&ctx, &value).unwrap(), "3");
    let value = "  1.5 ".to_script(&ctx);
    assert_eq!(f64::from_script(&ctx, &value).unwrap(), 1.5);
}
