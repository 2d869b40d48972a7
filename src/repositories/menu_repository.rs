use thiserror::Error;

use crate::models::smoothie::{Smoothie, SmoothieError, StoreSmoothieRequest};

#[derive(Error, Debug)]
pub enum MenuRepositoryError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] SmoothieError),
}

/// Menu repository trait for read access to what the shop sells
pub trait MenuRepository {
    fn all(&self) -> Result<Vec<Smoothie>, MenuRepositoryError>;
}

/// Menu held in memory, in the order it was given
pub struct InMemoryMenuRepository {
    items: Vec<Smoothie>,
}

impl InMemoryMenuRepository {
    pub fn new(items: Vec<Smoothie>) -> Self {
        Self { items }
    }

    /// The shop's standard five smoothies
    pub fn house_menu() -> Result<Self, MenuRepositoryError> {
        let requests = vec![
            StoreSmoothieRequest::new("Tropical Twist", 4.75)
                .vegan(true)
                .ingredients(["mango", "pineapple", "coconut milk"]),
            StoreSmoothieRequest::new("Green Power", 6.00)
                .vegan(true)
                .ingredients(["spinach", "kale", "banana", "almond milk"]),
            StoreSmoothieRequest::new("Berry Bliss", 5.50)
                .ingredients(["strawberry", "blueberry", "greek yogurt"]),
            StoreSmoothieRequest::new("Classic Banana", 3.00)
                .ingredients(["banana", "milk", "honey"]),
            StoreSmoothieRequest::new("Peach Sunrise", 4.25)
                .vegan(true)
                .ingredients(["peach", "orange juice", "oat milk"]),
        ];

        let items = requests
            .into_iter()
            .map(Smoothie::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(items))
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn all(&self) -> Result<Vec<Smoothie>, MenuRepositoryError> {
        Ok(self.items.clone())
    }
}
