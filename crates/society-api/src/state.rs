//! Application state shared across all handlers.

use std::sync::Arc;

use society_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use society_core::config::AppConfig;
use society_core::result::AppResult;
use society_database::DatabasePool;
use society_database::repositories::{
    BookingRepository, ChatRepository, LostFoundRepository, MaintenanceRepository,
    NoticeRepository, PollRepository, UserRepository,
};
use society_service::{
    AuthService, BookingService, ChatService, LostFoundService, MaintenanceService, NoticeService,
    PollService, ReportService, ResidentService,
};
use society_storage::ImageStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool wrapper.
    pub db: DatabasePool,
    /// Image store root (also served statically under `/uploads`).
    pub images: Arc<ImageStore>,

    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Registration, login, and current-user lookup.
    pub auth_service: Arc<AuthService>,
    /// Resident directory.
    pub resident_service: Arc<ResidentService>,
    /// Notice board.
    pub notice_service: Arc<NoticeService>,
    /// Polls and voting.
    pub poll_service: Arc<PollService>,
    /// Facility bookings.
    pub booking_service: Arc<BookingService>,
    /// Lost-and-found board.
    pub lostfound_service: Arc<LostFoundService>,
    /// Per-item chats.
    pub chat_service: Arc<ChatService>,
    /// Maintenance and complaint requests.
    pub maintenance_service: Arc<MaintenanceService>,
    /// Monthly maintenance report.
    pub report_service: Arc<ReportService>,
}

impl AppState {
    /// Wires repositories and services on top of an established pool and
    /// image store.
    pub fn initialize(config: AppConfig, db: DatabasePool, images: ImageStore) -> AppResult<Self> {
        let pool = db.pool().clone();
        let images = Arc::new(images);

        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let notice_repo = Arc::new(NoticeRepository::new(pool.clone()));
        let poll_repo = Arc::new(PollRepository::new(pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(pool.clone()));
        let item_repo = Arc::new(LostFoundRepository::new(pool.clone()));
        let chat_repo = Arc::new(ChatRepository::new(pool.clone()));
        let maintenance_repo = Arc::new(MaintenanceRepository::new(pool));

        let hasher = Arc::new(PasswordHasher::new());
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            hasher,
            encoder,
            config.auth.password_min_length,
        ));
        let resident_service = Arc::new(ResidentService::new(user_repo));
        let notice_service = Arc::new(NoticeService::new(notice_repo.clone()));
        let poll_service = Arc::new(PollService::new(poll_repo, notice_repo));
        let booking_service = Arc::new(BookingService::new(booking_repo));
        let lostfound_service = Arc::new(LostFoundService::new(item_repo.clone(), images.clone()));
        let chat_service = Arc::new(ChatService::new(chat_repo, item_repo));
        let maintenance_service = Arc::new(MaintenanceService::new(maintenance_repo.clone()));
        let report_service = Arc::new(ReportService::new(maintenance_repo));

        Ok(Self {
            config: Arc::new(config),
            db,
            images,
            jwt_decoder,
            auth_service,
            resident_service,
            notice_service,
            poll_service,
            booking_service,
            lostfound_service,
            chat_service,
            maintenance_service,
            report_service,
        })
    }
}
