use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    class::ClassRepositoryImpl, health::HealthCheckRepositoryImpl,
    reservation::ReservationRepositoryImpl, session::SessionRepositoryImpl,
    settings::SettingsRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    class::ClassRepository, health::HealthCheckRepository, reservation::ReservationRepository,
    session::SessionRepository, settings::SettingsRepository, user::UserRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    class_repository: Arc<dyn ClassRepository>,
    session_repository: Arc<dyn SessionRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    settings_repository: Arc<dyn SettingsRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let class_repository = Arc::new(ClassRepositoryImpl::new(pool.clone()));
        let session_repository = Arc::new(SessionRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let settings_repository = Arc::new(SettingsRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            user_repository,
            class_repository,
            session_repository,
            reservation_repository,
            settings_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn class_repository(&self) -> Arc<dyn ClassRepository> {
        self.class_repository.clone()
    }

    pub fn session_repository(&self) -> Arc<dyn SessionRepository> {
        self.session_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn settings_repository(&self) -> Arc<dyn SettingsRepository> {
        self.settings_repository.clone()
    }
}
