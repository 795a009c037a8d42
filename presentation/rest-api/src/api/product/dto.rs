use poem_openapi::Object;

use business::domain::product::search::SearchCriteria;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::{ProductId, SortDirection};
use business::domain::product::view::ProductView;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Free-text description, empty when omitted
    pub description: Option<String>,
    /// Unit price, must be greater than zero
    pub price: f64,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

/// Partial update. Omitted fields, empty strings and non-positive prices
/// leave the stored value unchanged.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// New product name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New unit price
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    pub fn into_params(self, id: ProductId) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

impl From<ProductView> for ProductResponse {
    fn from(view: ProductView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            description: view.description,
            price: view.price,
            created_at: view.created_at,
            updated_at: view.updated_at,
        }
    }
}

/// Raw search query parameters as received.
#[derive(Debug, Clone, Default)]
pub struct SearchProductsQuery {
    pub name: Option<String>,
    pub exact_match: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by_price: Option<String>,
}

pub const INVALID_FLAG_MESSAGE: &str = "Invalid request format";

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`. Absent or empty is `false`.
pub fn parse_flag(raw: Option<&str>) -> Result<bool, String> {
    match raw {
        None | Some("") => Ok(false),
        Some("1" | "t" | "T" | "TRUE" | "true" | "True") => Ok(true),
        Some("0" | "f" | "F" | "FALSE" | "false" | "False") => Ok(false),
        Some(_) => Err(INVALID_FLAG_MESSAGE.to_string()),
    }
}

pub const INVALID_SORT_MESSAGE: &str = "Invalid sort_by_price value, expected 'asc' or 'desc'";

/// An absent or empty value means unsorted.
pub fn parse_sort_direction(raw: Option<&str>) -> Result<Option<SortDirection>, String> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<SortDirection>()
            .map(Some)
            .map_err(|_| INVALID_SORT_MESSAGE.to_string()),
    }
}

impl TryFrom<SearchProductsQuery> for SearchCriteria {
    type Error = String;

    fn try_from(query: SearchProductsQuery) -> Result<Self, Self::Error> {
        Ok(Self {
            sort_by_price: parse_sort_direction(query.sort_by_price.as_deref())?,
            name: query.name,
            exact_match: parse_flag(query.exact_match.as_deref())?,
            min_price: query.min_price.unwrap_or(0.0),
            max_price: query.max_price.unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_missing_and_empty_sort_as_unsorted() {
        assert_eq!(parse_sort_direction(None), Ok(None));
        assert_eq!(parse_sort_direction(Some("")), Ok(None));
    }

    #[test]
    fn should_parse_sort_directions() {
        assert_eq!(parse_sort_direction(Some("asc")), Ok(Some(SortDirection::Asc)));
        assert_eq!(parse_sort_direction(Some("desc")), Ok(Some(SortDirection::Desc)));
    }

    #[test]
    fn should_reject_unknown_sort_direction() {
        assert_eq!(
            parse_sort_direction(Some("sideways")),
            Err(INVALID_SORT_MESSAGE.to_string())
        );
    }

    #[test]
    fn should_accept_every_boolean_spelling_for_flags() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_flag(Some(raw)), Ok(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_flag(Some(raw)), Ok(false), "{raw}");
        }
        assert_eq!(parse_flag(None), Ok(false));
        assert_eq!(parse_flag(Some("yes")), Err(INVALID_FLAG_MESSAGE.to_string()));
    }

    #[test]
    fn should_default_missing_search_parameters() {
        let criteria = SearchCriteria::try_from(SearchProductsQuery::default()).unwrap();

        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn should_carry_search_parameters_into_criteria() {
        let criteria = SearchCriteria::try_from(SearchProductsQuery {
            name: Some("Widget".to_string()),
            exact_match: Some("true".to_string()),
            min_price: Some(10.0),
            max_price: Some(50.0),
            sort_by_price: Some("desc".to_string()),
        })
        .unwrap();

        assert_eq!(criteria.name.as_deref(), Some("Widget"));
        assert!(criteria.exact_match);
        assert_eq!(criteria.min_price, 10.0);
        assert_eq!(criteria.max_price, 50.0);
        assert_eq!(criteria.sort_by_price, Some(SortDirection::Desc));
    }

    #[test]
    fn should_map_view_to_response() {
        let response = ProductResponse::from(ProductView {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            name: "Pen".to_string(),
            description: String::new(),
            price: 1.5,
            created_at: "2024-01-02T03:04:05Z".to_string(),
            updated_at: "2024-01-02T03:04:05Z".to_string(),
        });

        assert_eq!(response.id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(response.created_at, "2024-01-02T03:04:05Z");
    }
}
