mod api;
mod config;
pub mod health;
pub mod modules;
mod shared;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::config::{load_env_files, AppConfig};

use crate::modules::admin::adapter::outgoing::{DashboardQueryPostgres, ModerationRepositoryPostgres};
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::services::{
    AnalyticsService, DashboardService, ListContentService, ListUsersService,
    ListVendorsForReviewService, RecentActivityService, SetFeaturedService,
    UpdateContentStatusService, UpdateUserStatusService, UpdateVendorStatusService,
};

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::modules::auth::adapter::outgoing::{
    SuperAdminRepositoryPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::modules::auth::application::services::{
    ChangePasswordService, GetProfileService, LoginUserService, RefreshTokenService,
    RegisterUserService, SuperAdminLoginService, SuperAdminSeeder, UpdateProfileService,
    VerifyEmailService,
};

use crate::modules::bookings::adapter::outgoing::{BookingQueryPostgres, BookingRepositoryPostgres};
use crate::modules::bookings::application::booking_use_cases::BookingUseCases;
use crate::modules::bookings::application::services::{
    BookingStatsService, CreateBookingService, DeleteBookingService, GetBookingService,
    ListBookingsService, UpcomingBookingsService, UpdateBookingService,
};

use crate::modules::email::adapter::outgoing::{LoggingEmailSender, SmtpConfig, SmtpEmailSender};
use crate::modules::email::application::ports::incoming::{AccountNotifier, VendorNotifier};
use crate::modules::email::application::ports::outgoing::EmailSender;
use crate::modules::email::application::services::EmailNotificationService;

use crate::modules::favorites::adapter::outgoing::{
    FavoriteQueryPostgres, FavoriteRepositoryPostgres,
};
use crate::modules::favorites::application::favorite_use_cases::FavoriteUseCases;
use crate::modules::favorites::application::services::{
    AddFavoriteService, CheckFavoriteService, ListFavoritesService, RemoveFavoriteService,
    RemoveVendorFavoriteService, UpdateFavoriteService,
};
use crate::modules::ideas::adapter::outgoing::{IdeaQueryPostgres, IdeaRepositoryPostgres};
use crate::modules::ideas::application::idea_use_cases::IdeaUseCases;
use crate::modules::ideas::application::services::{
    CreateIdeaService, DeleteIdeaService, GetIdeaService, LikeIdeaService, ListIdeasService,
    RelatedIdeasService, ShareIdeaService, TrendingIdeasService, UpdateIdeaService,
};

use crate::modules::inquiries::adapter::outgoing::{InquiryQueryPostgres, InquiryRepositoryPostgres};
use crate::modules::inquiries::application::inquiry_use_cases::InquiryUseCases;
use crate::modules::inquiries::application::services::{
    AddInquiryMessageService, CreateInquiryService, DeleteInquiryService, GetInquiryService,
    ListInquiriesService, MarkInquiryReadService, RecentInquiriesService, UnreadCountService,
    UpdateInquiryStatusService,
};

use crate::modules::planning::adapter::outgoing::{
    PlanningQueryPostgres, PlanningRepositoryPostgres,
};
use crate::modules::planning::application::planning_use_cases::PlanningUseCases;
use crate::modules::planning::application::services::{
    AddPlanningItemsService, CreatePlanningService, DeletePlanningService, GetPlanningService,
    PlanningStatsService, RemovePlanningItemService, UpdatePlanningItemService,
    UpdatePlanningService,
};

use crate::modules::portfolio::adapter::outgoing::{
    PortfolioQueryPostgres, PortfolioRepositoryPostgres,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::services::{
    CreatePortfolioService, DeletePortfolioService, GetPortfolioService, LikePortfolioService,
    ListMyPortfolioService, UpdatePortfolioService, VendorPortfolioService,
};
use crate::modules::reviews::adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres};
use crate::modules::reviews::application::review_use_cases::ReviewUseCases;
use crate::modules::reviews::application::services::{
    CreateReviewService, DeleteReviewService, GetReviewService, ListReviewsService,
    MarkReviewHelpfulService, RespondToReviewService, UpdateReviewService,
    VendorReviewStatsService,
};

use crate::modules::vendors::adapter::outgoing::{VendorQueryPostgres, VendorRepositoryPostgres};
use crate::modules::vendors::application::services::{
    CreateVendorService, DeleteVendorService, FeaturedVendorsService, GetMyVendorService,
    GetVendorService, ListVendorsService, UpdateVendorService,
};
use crate::modules::vendors::application::vendor_use_cases::VendorUseCases;

use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// One use-case group per module. Each group is registered as its own `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub vendors: VendorUseCases,
    pub portfolio: PortfolioUseCases,
    pub favorites: FavoriteUseCases,
    pub reviews: ReviewUseCases,
    pub ideas: IdeaUseCases,
    pub planning: PlanningUseCases,
    pub bookings: BookingUseCases,
    pub inquiries: InquiryUseCases,
    pub admin: AdminUseCases,
}

/// Adapters shared by every module, built once per process.
struct Infrastructure {
    db: Arc<DatabaseConnection>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    user_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    admin_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    notifications: Arc<EmailNotificationService>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();

    let config = AppConfig::from_env().context("Invalid application configuration")?;
    info!(environment = %config.environment, "Starting wedding marketplace API");
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }

    let db = Arc::new(conn);

    let sender: Arc<dyn EmailSender + Send + Sync> =
        match SmtpConfig::from_env().context("Invalid SMTP configuration")? {
            Some(smtp) => Arc::new(
                SmtpEmailSender::from_config(&smtp).context("Failed to build SMTP transport")?,
            ),
            None => {
                warn!("EMAIL_FROM is not set, outgoing emails will only be logged");
                Arc::new(LoggingEmailSender)
            }
        };

    let infra = Infrastructure {
        db: Arc::clone(&db),
        tokens: Arc::new(JwtTokenService::new(jwt_config)),
        user_hasher: Arc::new(Argon2Hasher::from_env().context("Invalid Argon2 parameters")?),
        admin_hasher: Arc::new(BcryptHasher::default()),
        notifications: Arc::new(EmailNotificationService::new(
            sender,
            &config.verify_email_url(),
        )),
    };

    if let Some(seed) = &config.super_admin {
        let seeder = SuperAdminSeeder::new(
            SuperAdminRepositoryPostgres::new(Arc::clone(&db)),
            Arc::clone(&infra.admin_hasher),
        );
        match seeder.seed(seed).await {
            Ok(true) => info!(email = %seed.email, "Super admin account seeded"),
            Ok(false) => info!(email = %seed.email, "Super admin account already present"),
            Err(e) => warn!(error = %e, "Super admin seeding skipped"),
        }
    }

    let state = build_state(&infra);
    let token_provider = Arc::clone(&infra.tokens);
    let api_prefix = config.api_prefix.clone();
    let server_url = config.server_url();

    info!(address = %server_url, prefix = %api_prefix, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(web::Data::new(state.auth.clone()))
            .app_data(web::Data::new(state.vendors.clone()))
            .app_data(web::Data::new(state.portfolio.clone()))
            .app_data(web::Data::new(state.favorites.clone()))
            .app_data(web::Data::new(state.reviews.clone()))
            .app_data(web::Data::new(state.ideas.clone()))
            .app_data(web::Data::new(state.planning.clone()))
            .app_data(web::Data::new(state.bookings.clone()))
            .app_data(web::Data::new(state.inquiries.clone()))
            .app_data(web::Data::new(state.admin.clone()))
            .service(
                SwaggerUi::new("/api/docs/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(crate::health::health)
            .service(crate::health::readiness)
            .service(
                web::scope(&api_prefix)
                    .app_data(custom_json_config())
                    .app_data(custom_query_config())
                    .app_data(custom_path_config())
                    .configure(init_routes),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_state(infra: &Infrastructure) -> AppState {
    let db = &infra.db;

    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let vendor_query = VendorQueryPostgres::new(Arc::clone(db));
    let vendor_repo = VendorRepositoryPostgres::new(Arc::clone(db));
    let review_query = ReviewQueryPostgres::new(Arc::clone(db));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(db));
    let idea_query = IdeaQueryPostgres::new(Arc::clone(db));
    let idea_repo = IdeaRepositoryPostgres::new(Arc::clone(db));
    let planning_query = PlanningQueryPostgres::new(Arc::clone(db));
    let planning_repo = PlanningRepositoryPostgres::new(Arc::clone(db));
    let booking_query = BookingQueryPostgres::new(Arc::clone(db));
    let booking_repo = BookingRepositoryPostgres::new(Arc::clone(db));
    let inquiry_query = InquiryQueryPostgres::new(Arc::clone(db));
    let inquiry_repo = InquiryRepositoryPostgres::new(Arc::clone(db));
    let moderation_repo = ModerationRepositoryPostgres::new(Arc::clone(db));
    let portfolio_query = PortfolioQueryPostgres::new(Arc::clone(db));
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(db));
    let favorite_query = FavoriteQueryPostgres::new(Arc::clone(db));
    let favorite_repo = FavoriteRepositoryPostgres::new(Arc::clone(db));

    let tokens = &infra.tokens;
    let hasher = &infra.user_hasher;
    let account_notifier: Arc<dyn AccountNotifier + Send + Sync> = infra.notifications.clone();
    let vendor_notifier: Arc<dyn VendorNotifier + Send + Sync> = infra.notifications.clone();

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_repo.clone(),
            Arc::clone(hasher),
            Arc::clone(tokens),
            account_notifier,
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(hasher),
            Arc::clone(tokens),
        )),
        refresh: Arc::new(RefreshTokenService::new(user_query.clone(), Arc::clone(tokens))),
        verify_email: Arc::new(VerifyEmailService::new(user_repo.clone(), Arc::clone(tokens))),
        get_profile: Arc::new(GetProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(hasher),
        )),
        super_admin_login: Arc::new(SuperAdminLoginService::new(
            SuperAdminRepositoryPostgres::new(Arc::clone(db)),
            Arc::clone(&infra.admin_hasher),
            Arc::clone(tokens),
        )),
    };

    let vendors = VendorUseCases {
        create: Arc::new(CreateVendorService::new(vendor_repo.clone())),
        list: Arc::new(ListVendorsService::new(vendor_query.clone())),
        get: Arc::new(GetVendorService::new(vendor_query.clone(), vendor_repo.clone())),
        get_mine: Arc::new(GetMyVendorService::new(vendor_query.clone())),
        featured: Arc::new(FeaturedVendorsService::new(vendor_query.clone())),
        update: Arc::new(UpdateVendorService::new(vendor_query.clone(), vendor_repo.clone())),
        delete: Arc::new(DeleteVendorService::new(vendor_query.clone(), vendor_repo)),
    };

    let reviews = ReviewUseCases {
        create: Arc::new(CreateReviewService::new(
            review_query.clone(),
            review_repo.clone(),
            vendor_query.clone(),
            booking_query.clone(),
        )),
        list: Arc::new(ListReviewsService::new(review_query.clone())),
        get: Arc::new(GetReviewService::new(review_query.clone())),
        vendor_stats: Arc::new(VendorReviewStatsService::new(
            review_query.clone(),
            vendor_query.clone(),
        )),
        update: Arc::new(UpdateReviewService::new(review_query.clone(), review_repo.clone())),
        delete: Arc::new(DeleteReviewService::new(review_query.clone(), review_repo.clone())),
        respond: Arc::new(RespondToReviewService::new(
            review_query.clone(),
            review_repo.clone(),
            vendor_query.clone(),
        )),
        helpful: Arc::new(MarkReviewHelpfulService::new(review_query, review_repo)),
    };

    let ideas = IdeaUseCases {
        create: Arc::new(CreateIdeaService::new(user_query.clone(), idea_repo.clone())),
        list: Arc::new(ListIdeasService::new(idea_query.clone())),
        get: Arc::new(GetIdeaService::new(idea_query.clone(), idea_repo.clone())),
        trending: Arc::new(TrendingIdeasService::new(idea_query.clone())),
        related: Arc::new(RelatedIdeasService::new(idea_query.clone())),
        update: Arc::new(UpdateIdeaService::new(idea_query.clone(), idea_repo.clone())),
        delete: Arc::new(DeleteIdeaService::new(idea_query, idea_repo.clone())),
        like: Arc::new(LikeIdeaService::new(idea_repo.clone())),
        share: Arc::new(ShareIdeaService::new(idea_repo)),
    };

    let planning = PlanningUseCases {
        create: Arc::new(CreatePlanningService::new(
            planning_query.clone(),
            planning_repo.clone(),
        )),
        get: Arc::new(GetPlanningService::new(planning_query.clone())),
        update: Arc::new(UpdatePlanningService::new(
            planning_query.clone(),
            planning_repo.clone(),
        )),
        delete: Arc::new(DeletePlanningService::new(
            planning_query.clone(),
            planning_repo.clone(),
        )),
        stats: Arc::new(PlanningStatsService::new(planning_query.clone())),
        add_items: Arc::new(AddPlanningItemsService::new(
            planning_query.clone(),
            planning_repo.clone(),
        )),
        update_item: Arc::new(UpdatePlanningItemService::new(
            planning_query.clone(),
            planning_repo.clone(),
        )),
        remove_item: Arc::new(RemovePlanningItemService::new(planning_query, planning_repo)),
    };

    let bookings = BookingUseCases {
        create: Arc::new(CreateBookingService::new(
            booking_repo.clone(),
            vendor_query.clone(),
        )),
        list: Arc::new(ListBookingsService::new(booking_query.clone(), vendor_query.clone())),
        get: Arc::new(GetBookingService::new(booking_query.clone(), vendor_query.clone())),
        stats: Arc::new(BookingStatsService::new(booking_query.clone(), vendor_query.clone())),
        upcoming: Arc::new(UpcomingBookingsService::new(
            booking_query.clone(),
            vendor_query.clone(),
        )),
        update: Arc::new(UpdateBookingService::new(
            booking_query.clone(),
            booking_repo.clone(),
            vendor_query.clone(),
        )),
        delete: Arc::new(DeleteBookingService::new(
            booking_query,
            booking_repo,
            vendor_query.clone(),
        )),
    };

    let inquiries = InquiryUseCases {
        create: Arc::new(CreateInquiryService::new(
            inquiry_repo.clone(),
            vendor_query.clone(),
        )),
        list: Arc::new(ListInquiriesService::new(
            inquiry_query.clone(),
            vendor_query.clone(),
        )),
        get: Arc::new(GetInquiryService::new(inquiry_query.clone(), vendor_query.clone())),
        unread_count: Arc::new(UnreadCountService::new(
            inquiry_query.clone(),
            vendor_query.clone(),
        )),
        recent: Arc::new(RecentInquiriesService::new(
            inquiry_query.clone(),
            vendor_query.clone(),
        )),
        add_message: Arc::new(AddInquiryMessageService::new(
            inquiry_query.clone(),
            inquiry_repo.clone(),
            vendor_query.clone(),
        )),
        mark_read: Arc::new(MarkInquiryReadService::new(
            inquiry_query.clone(),
            inquiry_repo.clone(),
            vendor_query.clone(),
        )),
        update_status: Arc::new(UpdateInquiryStatusService::new(
            inquiry_query.clone(),
            inquiry_repo.clone(),
            vendor_query.clone(),
        )),
        delete: Arc::new(DeleteInquiryService::new(
            inquiry_query,
            inquiry_repo,
            vendor_query.clone(),
        )),
    };

    let portfolio = PortfolioUseCases {
        create: Arc::new(CreatePortfolioService::new(
            vendor_query.clone(),
            portfolio_repo.clone(),
        )),
        list_mine: Arc::new(ListMyPortfolioService::new(
            vendor_query.clone(),
            portfolio_query.clone(),
        )),
        get: Arc::new(GetPortfolioService::new(
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        for_vendor: Arc::new(VendorPortfolioService::new(
            vendor_query.clone(),
            portfolio_query.clone(),
        )),
        update: Arc::new(UpdatePortfolioService::new(
            vendor_query.clone(),
            portfolio_query.clone(),
            portfolio_repo.clone(),
        )),
        delete: Arc::new(DeletePortfolioService::new(
            vendor_query.clone(),
            portfolio_query,
            portfolio_repo.clone(),
        )),
        like: Arc::new(LikePortfolioService::new(portfolio_repo)),
    };

    let favorites = FavoriteUseCases {
        add: Arc::new(AddFavoriteService::new(
            vendor_query.clone(),
            favorite_repo.clone(),
        )),
        list: Arc::new(ListFavoritesService::new(favorite_query.clone())),
        check: Arc::new(CheckFavoriteService::new(favorite_query)),
        update: Arc::new(UpdateFavoriteService::new(favorite_repo.clone())),
        remove: Arc::new(RemoveFavoriteService::new(favorite_repo.clone())),
        remove_by_vendor: Arc::new(RemoveVendorFavoriteService::new(favorite_repo)),
    };

    let dashboard_query = DashboardQueryPostgres::new(Arc::clone(db));
    let admin = AdminUseCases {
        dashboard: Arc::new(DashboardService::new(dashboard_query.clone())),
        recent_activity: Arc::new(RecentActivityService::new(dashboard_query.clone())),
        analytics: Arc::new(AnalyticsService::new(dashboard_query)),
        list_users: Arc::new(ListUsersService::new(moderation_repo.clone())),
        list_content: Arc::new(ListContentService::new(moderation_repo.clone())),
        list_vendors: Arc::new(ListVendorsForReviewService::new(vendor_query)),
        update_vendor_status: Arc::new(UpdateVendorStatusService::new(
            moderation_repo.clone(),
            user_query,
            vendor_notifier,
        )),
        update_content_status: Arc::new(UpdateContentStatusService::new(moderation_repo.clone())),
        update_user_status: Arc::new(UpdateUserStatusService::new(user_repo)),
        set_featured: Arc::new(SetFeaturedService::new(moderation_repo)),
    };

    AppState {
        auth,
        vendors,
        portfolio,
        favorites,
        reviews,
        ideas,
        planning,
        bookings,
        inquiries,
        admin,
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::modules::auth::adapter::incoming::web::routes::configure)
        .configure(crate::modules::portfolio::adapter::incoming::web::routes::configure)
        .configure(crate::modules::vendors::adapter::incoming::web::routes::configure)
        .configure(crate::modules::favorites::adapter::incoming::web::routes::configure)
        .configure(crate::modules::reviews::adapter::incoming::web::routes::configure)
        .configure(crate::modules::ideas::adapter::incoming::web::routes::configure)
        .configure(crate::modules::planning::adapter::incoming::web::routes::configure)
        .configure(crate::modules::bookings::adapter::incoming::web::routes::configure)
        .configure(crate::modules::inquiries::adapter::incoming::web::routes::configure)
        .configure(crate::modules::admin::adapter::incoming::web::routes::configure);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
