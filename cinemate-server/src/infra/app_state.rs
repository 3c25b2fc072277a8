use std::{fmt, sync::Arc};

use cinemate_core::application::unit_of_work::CatalogUnitOfWork;
use cinemate_core::domain::catalog::{
    FavoritesToggle, HierarchyNavigator, ListingService,
};
use cinemate_core::domain::users::auth::{AuthCrypto, AuthenticationService};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub unit_of_work: Arc<CatalogUnitOfWork>,
    pub config: Arc<Config>,
    pub auth_service: Arc<AuthenticationService>,
    pub listing: ListingService,
    pub navigator: HierarchyNavigator,
    pub favorites: FavoritesToggle,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("unit_of_work", &self.unit_of_work)
            .field("dev_mode", &self.config.dev_mode)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Compose services over the given repositories.
    pub fn new(
        unit_of_work: Arc<CatalogUnitOfWork>,
        config: Arc<Config>,
        crypto: Arc<AuthCrypto>,
    ) -> Self {
        let auth_service = Arc::new(AuthenticationService::new(
            crypto,
            Arc::clone(&unit_of_work.sessions),
            Arc::clone(&unit_of_work.users),
        ));

        Self {
            listing: ListingService::from_unit_of_work(&unit_of_work),
            navigator: HierarchyNavigator::from_unit_of_work(&unit_of_work),
            favorites: FavoritesToggle::from_unit_of_work(&unit_of_work),
            unit_of_work,
            config,
            auth_service,
        }
    }

    pub fn unit_of_work(&self) -> Arc<CatalogUnitOfWork> {
        Arc::clone(&self.unit_of_work)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn auth_service(&self) -> &AuthenticationService {
        &self.auth_service
    }
}
