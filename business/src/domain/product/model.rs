use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// A validated product that has not been stored yet.
///
/// Identifier and timestamps are assigned by the repository on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price.is_nan() || props.price <= 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            name: props.name,
            description: props.description.unwrap_or_default(),
            price: props.price,
        })
    }
}

/// Partial update of a product.
///
/// A field counts as supplied only when it is present and not its empty
/// sentinel: `""` for text, a non-positive value for the price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl ProductChanges {
    fn supplied_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn supplied_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.is_empty())
    }

    fn supplied_price(&self) -> Option<f64> {
        self.price.filter(|price| *price > 0.0)
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }

    /// Overwrites every field the changes actually supply, leaving the rest untouched.
    /// Identifier and timestamps are never modified here.
    pub fn apply_changes(&mut self, changes: &ProductChanges) {
        if let Some(name) = changes.supplied_name() {
            self.name = name.to_string();
        }
        if let Some(description) = changes.supplied_description() {
            self.description = description.to_string();
        }
        if let Some(price) = changes.supplied_price() {
            self.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stored_product(name: &str, description: &str, price: f64) -> Product {
        let now = Utc::now();
        Product::from_repository(
            ProductId::new("65a1f0c2e4b0a1b2c3d4e5f6"),
            name.to_string(),
            description.to_string(),
            price,
            now,
            now,
        )
    }

    #[test]
    fn should_default_description_to_empty() {
        let product = NewProduct::new(NewProductProps {
            name: "Pen".to_string(),
            description: None,
            price: 1.5,
        })
        .unwrap();

        assert_eq!(product.description, "");
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn should_reject_blank_name() {
        let result = NewProduct::new(NewProductProps {
            name: "   ".to_string(),
            description: None,
            price: 1.5,
        });

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_reject_non_positive_price() {
        for price in [0.0, -3.0, f64::NAN] {
            let result = NewProduct::new(NewProductProps {
                name: "Pen".to_string(),
                description: None,
                price,
            });
            assert!(matches!(result, Err(ProductError::InvalidPrice)));
        }
    }

    #[test]
    fn should_treat_empty_sentinels_as_not_supplied() {
        let mut product = stored_product("Pen", "Blue ink", 1.5);
        let original = product.clone();

        product.apply_changes(&ProductChanges {
            name: Some(String::new()),
            description: Some(String::new()),
            price: Some(0.0),
        });

        assert_eq!(product, original);
    }

    #[test]
    fn should_ignore_negative_price_change() {
        let mut product = stored_product("Pen", "Blue ink", 1.5);

        product.apply_changes(&ProductChanges {
            price: Some(-2.0),
            ..Default::default()
        });

        assert_eq!(product.price, 1.5);
    }

    proptest! {
        #[test]
        fn absent_changes_leave_product_untouched(
            name in "[a-zA-Z ]{1,20}",
            description in "[a-zA-Z ]{0,40}",
            price in 0.01f64..10_000.0,
        ) {
            let mut product = stored_product(&name, &description, price);
            let original = product.clone();

            product.apply_changes(&ProductChanges::default());

            prop_assert_eq!(product, original);
        }

        #[test]
        fn price_only_change_keeps_text_fields(
            name in "[a-zA-Z ]{1,20}",
            description in "[a-zA-Z ]{0,40}",
            old_price in 0.01f64..10_000.0,
            new_price in 0.01f64..10_000.0,
        ) {
            let mut product = stored_product(&name, &description, old_price);

            product.apply_changes(&ProductChanges {
                price: Some(new_price),
                ..Default::default()
            });

            prop_assert_eq!(&product.name, &name);
            prop_assert_eq!(&product.description, &description);
            prop_assert_eq!(product.price, new_price);
        }

        #[test]
        fn supplied_text_overwrites(
            name in "[a-zA-Z]{1,20}",
            description in "[a-zA-Z]{1,40}",
        ) {
            let mut product = stored_product("Pen", "Blue ink", 1.5);

            product.apply_changes(&ProductChanges {
                name: Some(name.clone()),
                description: Some(description.clone()),
                price: None,
            });

            prop_assert_eq!(product.name, name);
            prop_assert_eq!(product.description, description);
            prop_assert_eq!(product.price, 1.5);
        }
    }
}
