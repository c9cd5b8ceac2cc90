use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::enrollment::EnrollmentRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::hotel::HotelRepositoryImpl;
use adapter::repository::ticket::TicketRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::enrollment::EnrollmentRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::hotel::HotelRepository;
use kernel::repository::ticket::TicketRepository;
use kernel::service::booking::BookingService;
use kernel::service::capacity::RoomCapacityChecker;
use kernel::service::entitlement::EntitlementResolver;
use kernel::service::hotel::HotelService;
use shared::config::AppConfig;

// Every repository and service is constructed exactly once at process
// start; handlers receive shared handles from here.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    booking_service: Arc<BookingService>,
    hotel_service: Arc<HotelService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));

        let enrollment_repository: Arc<dyn EnrollmentRepository> =
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone()));
        let ticket_repository: Arc<dyn TicketRepository> =
            Arc::new(TicketRepositoryImpl::new(pool.clone()));
        let hotel_repository: Arc<dyn HotelRepository> =
            Arc::new(HotelRepositoryImpl::new(pool.clone()));

        let booking_service = Arc::new(BookingService::new(
            EntitlementResolver::new(enrollment_repository.clone(), ticket_repository.clone()),
            RoomCapacityChecker::new(hotel_repository.clone()),
            Arc::new(BookingRepositoryImpl::new(pool.clone())),
        ));
        let hotel_service = Arc::new(HotelService::new(
            hotel_repository,
            enrollment_repository,
            ticket_repository,
        ));

        Self {
            health_check_repository,
            auth_repository,
            booking_service,
            hotel_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn booking_service(&self) -> Arc<BookingService> {
        self.booking_service.clone()
    }

    pub fn hotel_service(&self) -> Arc<HotelService> {
        self.hotel_service.clone()
    }
}
