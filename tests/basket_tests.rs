use smoothie_shop::utils::formatting::format_receipt;
use smoothie_shop::models::{
    basket::Basket,
    priced_item::PricedItem,
    smoothie::{Smoothie, StoreSmoothieRequest},
};

fn smoothie(name: &str, price: f64) -> Smoothie {
    Smoothie::new(StoreSmoothieRequest::new(name, price)).expect("valid smoothie")
}

// A second item kind, to check the basket is not tied to Smoothie
#[derive(Debug, Clone)]
struct Topping {
    label: String,
    cost: f64,
}

impl PricedItem for Topping {
    fn name(&self) -> &str {
        &self.label
    }

    fn price(&self) -> f64 {
        self.cost
    }
}

#[test]
fn test_total_price_sums_items() {
    let mut basket = Basket::new();
    basket.add(smoothie("Mini Mango", 1.50));
    basket.add(smoothie("Mini Berry", 2.00));
    basket.add(smoothie("Mini Green", 2.25));

    assert_eq!(basket.total_price(), 5.75);
}

#[test]
fn test_empty_basket_total_is_zero() {
    let basket: Basket<Smoothie> = Basket::new();

    assert_eq!(basket.total_price(), 0.0);
    assert_eq!(basket.len(), 0);
    assert!(basket.is_empty());
}

#[test]
fn test_add_preserves_order_and_grows_by_one() {
    let mut basket = Basket::new();
    let names = ["Tropical Twist", "Green Power", "Berry Bliss"];

    for (i, name) in names.iter().enumerate() {
        basket.add(smoothie(name, 4.0));
        assert_eq!(basket.len(), i + 1);
    }

    let stored: Vec<&str> = basket.iter().map(|s| s.name()).collect();
    assert_eq!(stored, names);
}

#[test]
fn test_duplicates_are_kept() {
    let mut basket = Basket::new();
    basket.add(smoothie("Berry Bliss", 5.50));
    basket.add(smoothie("Berry Bliss", 5.50));

    assert_eq!(basket.len(), 2);
    assert_eq!(basket.total_price(), 11.0);
}

#[test]
fn test_printable_lines_follow_insertion_order() {
    let basket: Basket<Smoothie> = vec![
        smoothie("Tropical Twist", 4.75),
        smoothie("Classic Banana", 3.00),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        basket.printable_lines(),
        vec!["Tropical Twist: 4.75", "Classic Banana: 3.00"]
    );
    // reading twice gives the same answer
    assert_eq!(basket.printable_lines(), basket.printable_lines());
}

#[test]
fn test_basket_of_other_item_kind() {
    let mut basket = Basket::new();
    basket.add(Topping { label: "Chia".to_string(), cost: 0.50 });
    basket.add(Topping { label: "Granola".to_string(), cost: 0.75 });

    assert_eq!(basket.total_price(), 1.25);
    assert_eq!(basket.printable_lines(), vec!["Chia: 0.50", "Granola: 0.75"]);
}

#[test]
fn test_basket_of_borrowed_items() {
    let menu = vec![smoothie("Green Power", 6.00), smoothie("Peach Sunrise", 4.25)];

    let mut basket: Basket<&Smoothie> = Basket::new();
    basket.extend(menu.iter());
    basket.add(&menu[1]);

    assert_eq!(basket.len(), 3);
    assert_eq!(basket.total_price(), 14.5);
}

#[test]
fn test_into_iterator_yields_owned_items() {
    let mut basket = Basket::new();
    basket.add(smoothie("Berry Bliss", 5.50));

    let items: Vec<Smoothie> = basket.into_iter().collect();
    assert_eq!(items[0].name(), "Berry Bliss");
}

#[test]
fn test_empty_basket_receipt_shows_positive_zero() {
    let basket: Basket<Smoothie> = Basket::new();

    assert!(basket.total_price().is_sign_positive());

    let receipt = format_receipt(&basket, "$");
    assert!(receipt.contains("$0.00"));
    assert!(!receipt.contains("-0.00"));
}
