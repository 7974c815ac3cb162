use catalog::filter::FilterCriteria;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub search_text: String,
    pub only_in_stock: bool,
}

impl ViewState {
    pub fn with_search(self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self
        }
    }

    pub fn with_stock_only(self, only_in_stock: bool) -> Self {
        Self {
            only_in_stock,
            ..self
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search_text.clone(),
            only_in_stock: self.only_in_stock,
        }
    }
}
