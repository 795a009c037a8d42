use std::sync::Arc;

use mongodb::Database;

use logger::TracingLogger;
use persistence::db::DatabaseConfig;
use persistence::product::repository::ProductRepositoryMongo;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(database: Database, config: &DatabaseConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryMongo::new(
            &database,
            config.operation_timeout,
        ));

        Self {
            health_api: HealthApi::new(database, config.operation_timeout),
            product_api: product_api(product_repository, logger),
        }
    }
}

/// Wires every product use case around one repository and logger.
pub fn product_api(
    repository: Arc<dyn ProductRepository>,
    logger: Arc<dyn Logger>,
) -> ProductApi {
    let create_use_case = Arc::new(CreateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let update_use_case = Arc::new(UpdateProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
        repository: repository.clone(),
        logger: logger.clone(),
    });
    let search_use_case = Arc::new(SearchProductsUseCaseImpl { repository, logger });

    ProductApi::new(
        create_use_case,
        get_all_use_case,
        get_by_id_use_case,
        update_use_case,
        delete_use_case,
        search_use_case,
    )
}
