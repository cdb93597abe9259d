//! End-to-end invoice format tests.
//!
//! The invoice layout is an external contract: column widths and border
//! characters must match byte for byte. These tests pin the full rendered
//! output for representative carts.

use checkout_core::{CouponSpec, Inventory, Money, Percent, PromotionSpec};

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

#[test]
fn single_plain_item_invoice() {
    let mut inventory = Inventory::new();
    inventory
        .register("Milk", money("2.50"), PromotionSpec::None)
        .unwrap();

    let mut cart = inventory.new_cart();
    cart.add("Milk", 2).unwrap();

    let expected = "\
     +------------------------------------------------+----------+\n\
     | Name                                       qty |    price |\n\
     +------------------------------------------------+----------+\n\
     | Milk                                         2 |     5.00 |\n\
     +------------------------------------------------+----------+\n\
     | TOTAL                                          |     5.00 |\n\
     +------------------------------------------------+----------+\n\
    ";
    assert_eq!(cart.invoice(), expected);
}

#[test]
fn full_invoice_with_promotions_and_coupon() {
    let mut inventory = Inventory::new();
    inventory
        .register(
            "Shampoo",
            money("10.00"),
            PromotionSpec::BuyNGetOneFree { nth: 3 },
        )
        .unwrap();
    inventory
        .register(
            "Green Tea",
            money("10.00"),
            PromotionSpec::Package {
                size: 3,
                percent_off: Percent::from_percent(20),
            },
        )
        .unwrap();
    inventory
        .register(
            "Coffee",
            money("10.00"),
            PromotionSpec::Threshold {
                threshold: 2,
                percent_off: Percent::from_percent(50),
            },
        )
        .unwrap();
    inventory
        .register_coupon(
            "TEA-TIME",
            CouponSpec::Percent {
                percent: Percent::from_percent(20),
            },
        )
        .unwrap();

    let mut cart = inventory.new_cart();
    cart.add("Shampoo", 3).unwrap();   // 30.00, one free -> -10.00
    cart.add("Green Tea", 4).unwrap(); // 40.00, one package of 3 -> -6.00
    cart.add("Coffee", 5).unwrap();    // 50.00, 3 units past threshold -> -15.00
    cart.use_coupon("TEA-TIME").unwrap(); // 20% of 89.00 -> -17.80

    let expected = "\
     +------------------------------------------------+----------+\n\
     | Name                                       qty |    price |\n\
     +------------------------------------------------+----------+\n\
     | Shampoo                                      3 |    30.00 |\n\
     |   (buy 2, get 1 free)                          |   -10.00 |\n\
     | Green Tea                                    4 |    40.00 |\n\
     |   (get 20% off for every 3)                    |    -6.00 |\n\
     | Coffee                                       5 |    50.00 |\n\
     |   (50% off of every after the 2nd)             |   -15.00 |\n\
     | Coupon TEA-TIME - 20% off                      |   -17.80 |\n\
     +------------------------------------------------+----------+\n\
     | TOTAL                                          |    71.20 |\n\
     +------------------------------------------------+----------+\n\
    ";
    assert_eq!(cart.invoice(), expected);
}

#[test]
fn amount_coupon_capped_at_products_total() {
    let mut inventory = Inventory::new();
    inventory
        .register("Soap", money("10.00"), PromotionSpec::None)
        .unwrap();
    inventory
        .register_coupon(
            "WELCOME",
            CouponSpec::Amount {
                amount: money("100.00"),
            },
        )
        .unwrap();

    let mut cart = inventory.new_cart();
    cart.add("Soap", 4).unwrap();
    cart.use_coupon("WELCOME").unwrap();

    // The coupon is worth more than the cart; the discount row shows the
    // capped amount and the total lands on exactly zero.
    let expected = "\
     +------------------------------------------------+----------+\n\
     | Name                                       qty |    price |\n\
     +------------------------------------------------+----------+\n\
     | Soap                                         4 |    40.00 |\n\
     | Coupon WELCOME - 100.00 off                    |   -40.00 |\n\
     +------------------------------------------------+----------+\n\
     | TOTAL                                          |     0.00 |\n\
     +------------------------------------------------+----------+\n\
    ";
    assert_eq!(cart.invoice(), expected);
}

#[test]
fn invoice_rows_follow_insertion_order() {
    let mut inventory = Inventory::new();
    for name in ["Zebra", "Apple", "Mango"] {
        inventory
            .register(name, money("1.00"), PromotionSpec::None)
            .unwrap();
    }

    let mut cart = inventory.new_cart();
    cart.add("Mango", 1).unwrap();
    cart.add("Apple", 1).unwrap();
    cart.add("Zebra", 1).unwrap();
    // Re-adding an existing product must not move its row
    cart.add("Mango", 2).unwrap();

    let invoice = cart.invoice();
    let mango = invoice.find("Mango").unwrap();
    let apple = invoice.find("Apple").unwrap();
    let zebra = invoice.find("Zebra").unwrap();
    assert!(mango < apple && apple < zebra);
}
