use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::{basket::Basket, priced_item::PricedItem, smoothie::Smoothie},
    repositories::{MenuRepository, MenuRepositoryError},
};

/// Keep the items matching `predicate`, in their original order.
pub fn filter_items<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Sorted copy of `items`. The sort is stable, so ties keep their order.
pub fn sort_items<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(compare);
    sorted
}

pub fn by_name<T: PricedItem>(a: &T, b: &T) -> Ordering {
    a.name().cmp(b.name())
}

pub fn by_price<T: PricedItem>(a: &T, b: &T) -> Ordering {
    a.price().total_cmp(&b.price())
}

pub fn sum_by<T, F>(items: &[T], field: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().map(field).fold(0.0, |acc, value| acc + value)
}

pub fn total_price<T: PricedItem>(items: &[T]) -> f64 {
    sum_by(items, |item| item.price())
}

pub fn for_each_item<T, F>(items: &[T], action: F)
where
    F: FnMut(&T),
{
    items.iter().for_each(action);
}

#[derive(Error, Debug)]
pub enum MenuServiceError {
    #[error("No smoothie named '{name}' on the menu")]
    NotFound { name: String },

    #[error("Repository error: {0}")]
    RepositoryError(#[from] MenuRepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Menu,
    Name,
    Price,
}

// Smoothie Filter for menu queries
#[derive(Debug, Default, Clone)]
pub struct SmoothieFilter {
    pub max_price: Option<f64>,
    pub vegan_only: bool,
    pub ingredient: Option<String>,
    pub search_term: Option<String>,
}

impl SmoothieFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only smoothies priced strictly below `price`
    pub fn cheaper_than(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn vegan_only(mut self) -> Self {
        self.vegan_only = true;
        self
    }

    pub fn with_ingredient(mut self, ingredient: String) -> Self {
        self.ingredient = Some(ingredient);
        self
    }

    pub fn with_search(mut self, term: String) -> Self {
        self.search_term = Some(term);
        self
    }

    pub fn matches(&self, smoothie: &Smoothie) -> bool {
        if let Some(max_price) = self.max_price {
            // a NaN threshold matches nothing
            if smoothie.price().partial_cmp(&max_price) != Some(Ordering::Less) {
                return false;
            }
        }

        if self.vegan_only && !smoothie.is_vegan() {
            return false;
        }

        if let Some(ref ingredient) = self.ingredient {
            if !smoothie.contains_ingredient(ingredient) {
                return false;
            }
        }

        if let Some(ref term) = self.search_term {
            if !smoothie.name().to_lowercase().contains(&term.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

pub struct MenuService {
    menu_repository: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(menu_repository: Arc<dyn MenuRepository>) -> Self {
        Self { menu_repository }
    }

    /// List the menu, filtered then sorted
    pub fn list(
        &self,
        filter: &SmoothieFilter,
        sort: SortKey,
    ) -> Result<Vec<Smoothie>, MenuServiceError> {
        debug!("Listing menu with filter: {:?}, sort: {:?}", filter, sort);

        let menu = self.menu_repository.all()?;
        let matching = filter_items(&menu, |smoothie| filter.matches(smoothie));

        let smoothies = match sort {
            SortKey::Menu => matching,
            SortKey::Name => sort_items(&matching, by_name),
            SortKey::Price => sort_items(&matching, by_price),
        };

        debug!("{} of {} smoothies matched", smoothies.len(), menu.len());
        Ok(smoothies)
    }

    /// Look a smoothie up by name, ignoring case
    pub fn find(&self, name: &str) -> Result<Smoothie, MenuServiceError> {
        let wanted = name.trim().to_lowercase();

        self.menu_repository
            .all()?
            .into_iter()
            .find(|smoothie| smoothie.name().to_lowercase() == wanted)
            .ok_or_else(|| MenuServiceError::NotFound {
                name: name.to_string(),
            })
    }

    /// Build a basket from smoothie names, in the order given.
    /// Fails on the first name that is not on the menu.
    pub fn order<S: AsRef<str>>(&self, names: &[S]) -> Result<Basket<Smoothie>, MenuServiceError> {
        info!("Placing order for {} smoothies", names.len());

        let mut basket = Basket::new();
        for name in names {
            match self.find(name.as_ref()) {
                Ok(smoothie) => basket.add(smoothie),
                Err(e) => {
                    warn!("Order rejected: {}", e);
                    return Err(e);
                }
            }
        }

        info!(
            "Order ready: {} items, total {:.2}",
            basket.len(),
            basket.total_price()
        );
        Ok(basket)
    }

    pub fn menu_total(&self) -> Result<f64, MenuServiceError> {
        let menu = self.menu_repository.all()?;
        Ok(total_price(&menu))
    }
}
