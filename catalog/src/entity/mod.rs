use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub category: String,
    pub name: String,
    pub price: String, // display-formatted, never parsed
    pub stocked: bool,
}
