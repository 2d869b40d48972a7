/// Anything the shop can put a price tag on.
///
/// Implementors must never report a negative price.
pub trait PricedItem {
    fn name(&self) -> &str;
    fn price(&self) -> f64;
}

impl<T: PricedItem + ?Sized> PricedItem for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }
}
