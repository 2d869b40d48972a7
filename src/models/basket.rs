use crate::models::priced_item::PricedItem;

/// An ordered, append-only collection of one kind of priced item.
///
/// Items keep the order they were added in. There is no removal or update.
#[derive(Debug, Clone)]
pub struct Basket<T: PricedItem> {
    items: Vec<T>,
}

impl<T: PricedItem> Default for Basket<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PricedItem> Basket<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the basket
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's price, unrounded. An empty basket totals 0.
    pub fn total_price(&self) -> f64 {
        // fold from +0.0: an empty f64 sum() is -0.0
        self.items.iter().map(PricedItem::price).fold(0.0, |acc, price| acc + price)
    }

    /// One `name: price` line per item, in insertion order
    pub fn printable_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| format!("{}: {:.2}", item.name(), item.price()))
            .collect()
    }
}

impl<T: PricedItem> FromIterator<T> for Basket<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: PricedItem> Extend<T> for Basket<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: PricedItem> IntoIterator for Basket<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: PricedItem> IntoIterator for &'a Basket<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Cup(&'static str, f64);

    impl PricedItem for Cup {
        fn name(&self) -> &str {
            self.0
        }

        fn price(&self) -> f64 {
            self.1
        }
    }

    #[test]
    fn test_empty_basket_totals_zero() {
        let basket: Basket<Cup> = Basket::new();
        assert!(basket.is_empty());
        assert_eq!(basket.total_price(), 0.0);
        assert!(basket.printable_lines().is_empty());
    }

    #[test]
    fn test_empty_total_is_positive_zero() {
        let basket: Basket<Cup> = Basket::new();
        assert!(basket.total_price().is_sign_positive());
    }

    #[test]
    fn test_printable_lines_use_two_decimals() {
        let mut basket = Basket::new();
        basket.add(Cup("Small", 3.0));
        basket.add(Cup("Large", 4.5));

        assert_eq!(basket.printable_lines(), vec!["Small: 3.00", "Large: 4.50"]);
    }
}
