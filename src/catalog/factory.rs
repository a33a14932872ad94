use crate::catalog::domain::CatalogService;
use crate::catalog::domain::library::SharedLibrary;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;

pub(crate) async fn create_catalog_service(config: &Configuration, library: SharedLibrary) -> Box<dyn CatalogService> {
    let publisher = create_publisher(config.events).await;
    Box::new(CatalogServiceImpl::new(config, library, publisher))
}
