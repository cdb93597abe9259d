//! End-to-end tests for the untyped `{kind, ...params}` registration
//! surface: JSON payloads in, validated inventory out.

use checkout_core::{CoreError, CouponSpec, Inventory, Money, PromotionSpec};
use serde_json::json;

#[test]
fn register_products_from_json_payloads() {
    let mut inventory = Inventory::new();

    let payloads = [
        ("Milk", "2.50", json!({})),
        ("Shampoo", "10.00", json!({"kind": "buyNGetOneFree", "nth": 3})),
        (
            "Green Tea",
            "3.20",
            json!({"kind": "package", "size": 5, "percentOff": 15}),
        ),
        (
            "Coffee",
            "4.75",
            json!({"kind": "threshold", "threshold": 10, "percentOff": 12.5}),
        ),
    ];

    for (name, price, payload) in payloads {
        let spec = PromotionSpec::from_value(&payload).unwrap();
        let price: Money = price.parse().unwrap();
        inventory.register(name, price, spec).unwrap();
    }

    assert!(inventory.has_product("Milk"));
    assert!(inventory.has_product("Coffee"));

    // The fractional percentage survives the trip into the invoice message
    assert_eq!(
        inventory.product("Coffee").unwrap().message(),
        "(12.5% off of every after the 10th)"
    );
}

#[test]
fn unknown_promotion_kind_is_rejected_up_front() {
    let err = PromotionSpec::from_value(&json!({"kind": "happyHour", "percentOff": 50}))
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnknownPromotionKind { kind } if kind == "happyHour"
    ));
}

#[test]
fn unknown_coupon_kind_is_rejected_up_front() {
    let err = CouponSpec::from_value(&json!({"kind": "loyalty", "points": 100})).unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnknownCouponKind { kind } if kind == "loyalty"
    ));
}

#[test]
fn coupon_payloads_round_trip_through_registration() {
    let mut inventory = Inventory::new();

    let spec = CouponSpec::from_value(&json!({"kind": "percent", "percent": 20})).unwrap();
    inventory.register_coupon("TEA-TIME", spec).unwrap();

    // Money serializes as cents, so 1050 means 10.50
    let spec = CouponSpec::from_value(&json!({"kind": "amount", "amount": 1050})).unwrap();
    inventory.register_coupon("WELCOME", spec).unwrap();

    assert_eq!(
        inventory.coupon("TEA-TIME").unwrap().message(),
        "Coupon TEA-TIME - 20% off"
    );
    assert_eq!(
        inventory.coupon("WELCOME").unwrap().message(),
        "Coupon WELCOME - 10.50 off"
    );
}

#[test]
fn malformed_payload_with_known_kind_names_the_kind() {
    let err = PromotionSpec::from_value(&json!({"kind": "package", "size": 3})).unwrap_err();
    match err {
        CoreError::MalformedSpec { kind, .. } => assert_eq!(kind, "package"),
        other => panic!("expected MalformedSpec, got {other:?}"),
    }
}
