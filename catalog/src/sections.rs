use indexmap::IndexMap;
use serde::Serialize;

use crate::entity::Product;
use crate::filter::{filter, FilterCriteria};

pub type Catalog = IndexMap<String, Vec<Product>>;

#[derive(Debug, PartialEq, Serialize)]
pub struct Section<'a> {
    pub category: &'a str,
    pub products: Vec<&'a Product>,
}

pub fn assemble<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<Section<'a>> {
    catalog
        .iter()
        .map(|(category, products)| Section {
            category,
            products: filter(products, criteria),
        })
        .collect()
}
