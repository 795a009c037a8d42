use super::value_objects::SortDirection;

/// Filters and ordering accepted by product search.
///
/// Price bounds use `0.0` (or anything non-positive) to mean "no bound".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub exact_match: bool,
    pub min_price: f64,
    pub max_price: f64,
    pub sort_by_price: Option<SortDirection>,
}

impl SearchCriteria {
    /// The name filter, if one applies.
    pub fn name_filter(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn lower_price_bound(&self) -> Option<f64> {
        Some(self.min_price).filter(|min| *min > 0.0)
    }

    pub fn upper_price_bound(&self) -> Option<f64> {
        Some(self.max_price).filter(|max| *max > 0.0)
    }
}
