use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::value_objects::ProductId;

/// Stored layout of a product in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

/// BSON dates carry millisecond precision; anything finer is dropped.
pub fn to_bson_datetime(timestamp: &DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(timestamp.timestamp_millis())
}

/// Fails for stored dates outside the range chrono can represent.
pub fn from_bson_datetime(timestamp: bson::DateTime) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::<Utc>::from_timestamp_millis(timestamp.timestamp_millis()).ok_or_else(|| {
        RepositoryError::database_error(format!("stored timestamp out of range: {timestamp}"))
    })
}

pub fn parse_object_id(id: &ProductId) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| RepositoryError::InvalidId)
}

impl ProductDocument {
    /// A document for insertion; both timestamps are `stored_at`.
    pub fn from_new(product: NewProduct, stored_at: bson::DateTime) -> Self {
        Self {
            id: None,
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: stored_at,
            updated_at: stored_at,
        }
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = self
            .id
            .ok_or_else(|| RepositoryError::database_error("product document has no _id"))?;

        Ok(Product::from_repository(
            ProductId::new(id.to_hex()),
            self.name,
            self.description,
            self.price,
            from_bson_datetime(self.created_at)?,
            from_bson_datetime(self.updated_at)?,
        ))
    }
}
