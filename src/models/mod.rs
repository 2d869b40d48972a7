pub mod priced_item;
pub mod smoothie;
pub mod basket;

pub use priced_item::PricedItem;
pub use smoothie::{Smoothie, SmoothieError, StoreSmoothieRequest};
pub use basket::Basket;
