use mongodb::bson::{Document, doc};

use business::domain::product::search::SearchCriteria;
use business::domain::product::value_objects::SortDirection;

/// One conjunctive predicate of a product search.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// Case-sensitive full equality on the name.
    NameEquals(String),
    /// Literal substring of the name.
    NameContains {
        pattern: String,
        case_insensitive: bool,
    },
    /// Inclusive price bounds; a missing side is unbounded.
    PriceRange { min: Option<f64>, max: Option<f64> },
}

impl FilterClause {
    fn field(&self) -> &'static str {
        match self {
            FilterClause::NameEquals(_) | FilterClause::NameContains { .. } => "name",
            FilterClause::PriceRange { .. } => "price",
        }
    }

    fn predicate(&self) -> mongodb::bson::Bson {
        match self {
            FilterClause::NameEquals(name) => name.clone().into(),
            FilterClause::NameContains {
                pattern,
                case_insensitive,
            } => {
                let options = if *case_insensitive { "i" } else { "" };
                doc! { "$regex": regex::escape(pattern), "$options": options }.into()
            }
            FilterClause::PriceRange { min, max } => {
                let mut range = Document::new();
                if let Some(min) = min {
                    range.insert("$gte", *min);
                }
                if let Some(max) = max {
                    range.insert("$lte", *max);
                }
                range.into()
            }
        }
    }
}

/// A search translated into store terms: the AND of its clauses plus an optional ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub clauses: Vec<FilterClause>,
    pub sort_by_price: Option<SortDirection>,
}

impl ProductQuery {
    pub fn from_criteria(criteria: &SearchCriteria) -> Self {
        let mut clauses = Vec::new();

        if let Some(name) = criteria.name_filter() {
            if criteria.exact_match {
                clauses.push(FilterClause::NameEquals(name.to_string()));
            } else {
                clauses.push(FilterClause::NameContains {
                    pattern: name.to_string(),
                    case_insensitive: true,
                });
            }
        }

        let min = criteria.lower_price_bound();
        let max = criteria.upper_price_bound();
        if min.is_some() || max.is_some() {
            clauses.push(FilterClause::PriceRange { min, max });
        }

        Self {
            clauses,
            sort_by_price: criteria.sort_by_price,
        }
    }

    /// Clauses target distinct fields, so a flat document expresses their conjunction.
    /// No clauses renders the empty, match-everything filter.
    pub fn filter(&self) -> Document {
        let mut filter = Document::new();
        for clause in &self.clauses {
            filter.insert(clause.field(), clause.predicate());
        }
        filter
    }

    pub fn sort(&self) -> Option<Document> {
        self.sort_by_price.map(|direction| match direction {
            SortDirection::Asc => doc! { "price": 1 },
            SortDirection::Desc => doc! { "price": -1 },
        })
    }
}
