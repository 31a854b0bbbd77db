use serde::{Deserialize, Serialize};

/// A product record as served by the store catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

/// Highest rating a product may carry.
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductDefect {
    EmptyTitle,
    NegativePrice,
    RatingAboveFive,
}

impl ProductDefect {
    pub fn description(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "title is empty",
            Self::NegativePrice => "price is negative",
            Self::RatingAboveFive => "rating exceeds 5",
        }
    }
}

impl Product {
    pub fn defects(&self) -> Vec<ProductDefect> {
        let mut defects = Vec::new();
        if self.title.trim().is_empty() {
            defects.push(ProductDefect::EmptyTitle);
        }
        if self.price < 0.0 {
            defects.push(ProductDefect::NegativePrice);
        }
        if self.rating.rate > MAX_RATING {
            defects.push(ProductDefect::RatingAboveFive);
        }
        defects
    }
}
