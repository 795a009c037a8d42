use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc, options::FindOptions};
use tracing::instrument;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::search::SearchCriteria;
use business::domain::product::value_objects::ProductId;

use super::entity::{ProductDocument, from_bson_datetime, parse_object_id, to_bson_datetime};
use super::query::ProductQuery;

pub const PRODUCTS_COLLECTION: &str = "products";

pub struct ProductRepositoryMongo {
    collection: Collection<ProductDocument>,
    operation_timeout: Duration,
}

impl ProductRepositoryMongo {
    pub fn new(database: &Database, operation_timeout: Duration) -> Self {
        Self {
            collection: database.collection::<ProductDocument>(PRODUCTS_COLLECTION),
            operation_timeout,
        }
    }

    /// Runs one store call under the operation timeout. Expiry drops the
    /// in-flight call and reports `RepositoryError::Timeout`.
    async fn bounded<T>(
        &self,
        operation: impl Future<Output = mongodb::error::Result<T>>,
    ) -> Result<T, RepositoryError> {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .map_err(|_| RepositoryError::timeout())?
            .map_err(|e| RepositoryError::database_error(e.to_string()))
    }

    async fn find_many(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError> {
        let options = FindOptions::builder().sort(query.sort()).build();

        let documents: Vec<ProductDocument> = self
            .bounded(async {
                let cursor = self
                    .collection
                    .find(query.filter())
                    .with_options(options)
                    .await?;
                cursor.try_collect().await
            })
            .await?;

        documents
            .into_iter()
            .map(ProductDocument::into_domain)
            .collect()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut document = ProductDocument::from_new(product, to_bson_datetime(&Utc::now()));

        let result = self
            .bounded(async { self.collection.insert_one(&document).await })
            .await?;

        document.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::database_error("store returned a non-ObjectId _id")
        })?);

        let product = document.into_domain()?;
        tracing::info!(product_id = %product.id, "Product inserted");
        Ok(product)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn find_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let oid = parse_object_id(id)?;

        self.bounded(async { self.collection.find_one(doc! { "_id": oid }).await })
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into_domain()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.find_many(&ProductQuery::default()).await
    }

    #[instrument(skip(self, product), fields(product_id = %id))]
    async fn update(&self, id: &ProductId, product: &Product) -> Result<Product, RepositoryError> {
        let oid = parse_object_id(id)?;
        let updated_at = to_bson_datetime(&Utc::now());
        let changes = doc! {
            "$set": {
                "name": product.name.as_str(),
                "description": product.description.as_str(),
                "price": product.price,
                "updated_at": updated_at,
            }
        };

        let result = self
            .bounded(async {
                self.collection
                    .update_one(doc! { "_id": oid }, changes)
                    .await
            })
            .await?;

        if result.matched_count == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(product_id = %id, "Product updated");
        Ok(Product {
            updated_at: from_bson_datetime(updated_at)?,
            ..product.clone()
        })
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let oid = parse_object_id(id)?;

        let result = self
            .bounded(async { self.collection.delete_one(doc! { "_id": oid }).await })
            .await?;

        if result.deleted_count == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Product>, RepositoryError> {
        let query = ProductQuery::from_criteria(criteria);
        tracing::debug!(filter = %query.filter(), "Running product search");
        self.find_many(&query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, connect};
    use mongodb::Client;
    use business::domain::product::value_objects::SortDirection;

    async fn repository() -> ProductRepositoryMongo {
        let url = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = connect(&DatabaseConfig::new(url, "product_db_test".to_string()))
            .await
            .unwrap();
        database
            .collection::<ProductDocument>(PRODUCTS_COLLECTION)
            .drop()
            .await
            .unwrap();
        ProductRepositoryMongo::new(&database, Duration::from_secs(5))
    }

    fn new_product(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: String::new(),
            price,
        }
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn should_round_trip_insert_update_delete() {
        let repo = repository().await;

        let created = repo.insert(new_product("Pen", 1.5)).await.unwrap();
        assert_eq!(created.created_at, created.updated_at);

        let fetched = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        let mut changed = fetched.clone();
        changed.price = 2.0;
        let updated = repo.update(&created.id, &changed).await.unwrap();
        assert_eq!(updated.price, 2.0);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(repo.find_by_id(&created.id).await.unwrap().price, 2.0);

        repo.delete(&created.id).await.unwrap();
        assert_eq!(
            repo.find_by_id(&created.id).await,
            Err(RepositoryError::NotFound)
        );
        assert_eq!(repo.delete(&created.id).await, Err(RepositoryError::NotFound));
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn should_filter_and_sort_search_results() {
        let repo = repository().await;
        for (name, price) in [
            ("Widget", 20.0),
            ("widget pro", 45.0),
            ("Gadget", 5.0),
            ("Widget XL", 80.0),
        ] {
            repo.insert(new_product(name, price)).await.unwrap();
        }

        let exact = repo
            .search(&SearchCriteria {
                name: Some("Widget".to_string()),
                exact_match: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(exact.len(), 1);

        let fuzzy = repo
            .search(&SearchCriteria {
                name: Some("widget".to_string()),
                min_price: 10.0,
                max_price: 50.0,
                sort_by_price: Some(SortDirection::Desc),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = fuzzy.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["widget pro", "Widget"]);

        let all = repo.search(&SearchCriteria::default()).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    /// The driver connects lazily, so an unroutable host stalls in server
    /// selection well past the operation timeout.
    async fn unreachable_repository(operation_timeout: Duration) -> ProductRepositoryMongo {
        let client =
            Client::with_uri_str("mongodb://10.255.255.1:27017/?serverSelectionTimeoutMS=30000")
                .await
                .unwrap();
        ProductRepositoryMongo::new(&client.database("product_db_test"), operation_timeout)
    }

    #[tokio::test]
    async fn should_time_out_when_store_does_not_answer() {
        let repo = unreachable_repository(Duration::from_millis(200)).await;
        let started = std::time::Instant::now();

        let all = repo.find_all().await;
        let one = repo
            .find_by_id(&ProductId::new("65a1f0c2e4b0a1b2c3d4e5f6"))
            .await;

        assert_eq!(all, Err(RepositoryError::Timeout));
        assert_eq!(one, Err(RepositoryError::Timeout));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn should_time_out_writes_when_store_does_not_answer() {
        let repo = unreachable_repository(Duration::from_millis(200)).await;

        let result = repo.insert(new_product("Pen", 1.5)).await;

        assert_eq!(result, Err(RepositoryError::Timeout));
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB
    async fn should_report_malformed_id() {
        let repo = repository().await;

        let result = repo.find_by_id(&ProductId::new("not-a-valid-id-format")).await;

        assert_eq!(result, Err(RepositoryError::InvalidId));
    }
}
