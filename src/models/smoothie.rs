use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::priced_item::PricedItem;

// Built only through `Smoothie::new`, so no Deserialize
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Smoothie {
    name: String,
    price: f64,
    vegan: bool,
    ingredients: Vec<String>,
}

// request dto
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = "validate_store_request"))]
pub struct StoreSmoothieRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom = "validate_name")]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[serde(default)]
    pub vegan: bool,

    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl StoreSmoothieRequest {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
            vegan: false,
            ingredients: Vec::new(),
        }
    }

    pub fn vegan(mut self, vegan: bool) -> Self {
        self.vegan = vegan;
        self
    }

    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("Name is required"));
    }
    Ok(())
}

// range() lets NaN through, so finiteness is checked here
fn validate_store_request(request: &StoreSmoothieRequest) -> Result<(), ValidationError> {
    if !request.price.is_finite() {
        return Err(ValidationError::new("price_not_finite"));
    }

    if request.ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(ValidationError::new("blank_ingredient"));
    }

    Ok(())
}

// custom error
#[derive(Debug, thiserror::Error)]
pub enum SmoothieError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl Smoothie {
    pub fn new(request: StoreSmoothieRequest) -> Result<Self, SmoothieError> {
        request.validate()?;

        Ok(Self {
            name: request.name.trim().to_string(),
            // -0.0 passes range(min = 0.0); normalise it
            price: request.price + 0.0,
            vegan: request.vegan,
            ingredients: request
                .ingredients
                .into_iter()
                .map(|i| i.trim().to_string())
                .collect(),
        })
    }

    pub fn is_vegan(&self) -> bool {
        self.vegan
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn contains_ingredient(&self, ingredient: &str) -> bool {
        let needle = ingredient.to_lowercase();
        self.ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&needle))
    }
}

impl PricedItem for Smoothie {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl std::fmt::Display for Smoothie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.price)
    }
}
