use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::adapter::incoming::web::routes as admin;
use crate::modules::auth::adapter::incoming::web::routes as auth;
use crate::modules::bookings::adapter::incoming::web::routes as bookings;
use crate::modules::favorites::adapter::incoming::web::routes as favorites;
use crate::modules::ideas::adapter::incoming::web::routes as ideas;
use crate::modules::inquiries::adapter::incoming::web::routes as inquiries;
use crate::modules::planning::adapter::incoming::web::routes as planning;
use crate::modules::portfolio::adapter::incoming::web::routes as portfolio;
use crate::modules::reviews::adapter::incoming::web::routes as reviews;
use crate::modules::vendors::adapter::incoming::web::routes as vendors;

/// Request and response bodies are collected from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wedding Marketplace API",
        version = "1.0.0",
        description = "Vendors, portfolios, reviews, inspiration, planning, bookings and inquiries for couples planning a wedding",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth
        auth::register_user_handler,
        auth::login_user_handler,
        auth::refresh_token_handler,
        auth::verify_email_handler,
        auth::get_profile_handler,
        auth::update_profile_handler,
        auth::change_password_handler,
        auth::super_admin_login_handler,

        // Vendors
        vendors::create_vendor_handler,
        vendors::list_vendors_handler,
        vendors::featured_vendors_handler,
        vendors::get_my_vendor_handler,
        vendors::get_vendor_handler,
        vendors::update_vendor_handler,
        vendors::delete_vendor_handler,

        // Portfolio
        portfolio::create_portfolio_handler,
        portfolio::list_my_portfolio_handler,
        portfolio::get_portfolio_handler,
        portfolio::update_portfolio_handler,
        portfolio::delete_portfolio_handler,
        portfolio::like_portfolio_handler,
        portfolio::vendor_portfolio_handler,

        // Favorites
        favorites::add_favorite_handler,
        favorites::list_favorites_handler,
        favorites::favorites_by_category_handler,
        favorites::check_favorite_handler,
        favorites::update_favorite_handler,
        favorites::remove_favorite_handler,
        favorites::remove_vendor_favorite_handler,

        // Reviews
        reviews::create_review_handler,
        reviews::list_reviews_handler,
        reviews::vendor_review_stats_handler,
        reviews::get_review_handler,
        reviews::update_review_handler,
        reviews::delete_review_handler,
        reviews::respond_to_review_handler,
        reviews::mark_review_helpful_handler,

        // Ideas
        ideas::create_idea_handler,
        ideas::list_ideas_handler,
        ideas::trending_ideas_handler,
        ideas::get_idea_handler,
        ideas::related_ideas_handler,
        ideas::update_idea_handler,
        ideas::delete_idea_handler,
        ideas::like_idea_handler,
        ideas::share_idea_handler,

        // Planning
        planning::create_planning_handler,
        planning::get_planning_handler,
        planning::update_planning_handler,
        planning::delete_planning_handler,
        planning::planning_stats_handler,
        planning::add_planning_items_handler,
        planning::update_planning_item_handler,
        planning::remove_planning_item_handler,

        // Bookings
        bookings::create_booking_handler,
        bookings::list_bookings_handler,
        bookings::booking_stats_handler,
        bookings::upcoming_bookings_handler,
        bookings::get_booking_handler,
        bookings::update_booking_handler,
        bookings::delete_booking_handler,

        // Inquiries
        inquiries::create_inquiry_handler,
        inquiries::list_inquiries_handler,
        inquiries::unread_count_handler,
        inquiries::recent_inquiries_handler,
        inquiries::get_inquiry_handler,
        inquiries::add_inquiry_message_handler,
        inquiries::mark_inquiry_read_handler,
        inquiries::update_inquiry_status_handler,
        inquiries::delete_inquiry_handler,

        // Admin
        admin::dashboard_handler,
        admin::recent_activity_handler,
        admin::analytics_handler,
        admin::list_users_handler,
        admin::list_content_handler,
        admin::list_vendors_for_review_handler,
        admin::update_vendor_status_handler,
        admin::update_content_status_handler,
        admin::update_user_status_handler,
        admin::set_featured_handler,
    ),
    components(
        schemas(ErrorResponse, ErrorDetail)
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login, tokens and profile"),
        (name = "vendors", description = "Vendor profiles and discovery"),
        (name = "portfolio", description = "Vendor project showcases"),
        (name = "favorites", description = "Vendors saved by a user"),
        (name = "reviews", description = "Customer reviews and vendor responses"),
        (name = "ideas", description = "Inspiration content and engagement"),
        (name = "planning", description = "Wedding planning document and progress"),
        (name = "bookings", description = "Vendor bookings and payments"),
        (name = "inquiries", description = "Customer to vendor conversations"),
        (name = "admin", description = "Moderation and platform statistics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /auth/login or /auth/register"))
                        .build(),
                ),
            )
        }
    }
}
