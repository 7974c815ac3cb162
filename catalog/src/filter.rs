use serde::{Deserialize, Serialize};

use crate::entity::Product;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub only_in_stock: bool,
}

fn name_matches(product: &Product, search_text: &str) -> bool {
    product
        .name
        .to_lowercase()
        .contains(&search_text.to_lowercase())
}

fn stock_matches(product: &Product, only_in_stock: bool) -> bool {
    !only_in_stock || product.stocked
}

pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| name_matches(product, &criteria.search_text))
        .filter(|product| stock_matches(product, criteria.only_in_stock))
        .collect()
}
