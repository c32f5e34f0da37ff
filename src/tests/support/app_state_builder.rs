//! `unused()` constructors for the use-case groups.
//!
//! Route tests replace the one or two use cases they exercise and leave the
//! rest as [`Unused`], which panics if a handler reaches it.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::domain::{
    ActivityItem, ActivityParams, Analytics, ContentFilter, ContentSort, ContentStatusChange,
    DashboardParams, DashboardStats, FeaturedChange, UserListFilter, UserSort, UserStatusChange,
    VendorStatusChange,
};
use crate::modules::admin::application::ports::incoming::use_cases::*;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::domain::entities::{Actor, ProfileUpdate, User};
use crate::modules::auth::application::ports::incoming::use_cases::*;
use crate::modules::bookings::application::booking_use_cases::BookingUseCases;
use crate::modules::bookings::application::domain::{
    Booking, BookingChanges, BookingFilter, BookingRequest, BookingSort, BookingStats,
};
use crate::modules::bookings::application::ports::incoming::use_cases::*;
use crate::modules::favorites::application::domain::{
    Favorite, FavoriteChanges, FavoriteRequest, FavoriteStatus,
};
use crate::modules::favorites::application::favorite_use_cases::FavoriteUseCases;
use crate::modules::favorites::application::ports::incoming::use_cases::*;
use crate::modules::ideas::application::domain::{
    Idea, IdeaChanges, IdeaFilter, IdeaRequest, IdeaSort, LikeOutcome, TrendingIdea,
};
use crate::modules::ideas::application::idea_use_cases::IdeaUseCases;
use crate::modules::ideas::application::ports::incoming::use_cases::*;
use crate::modules::inquiries::application::domain::{
    Inquiry, InquiryFilter, InquiryRequest, InquirySort, MessageRequest, StatusChange,
};
use crate::modules::inquiries::application::inquiry_use_cases::InquiryUseCases;
use crate::modules::inquiries::application::ports::incoming::use_cases::*;
use crate::modules::planning::application::domain::{
    Planning, PlanningChanges, PlanningRequest, PlanningSection, PlanningStats,
    SectionItemChanges, SectionItems,
};
use crate::modules::planning::application::planning_use_cases::PlanningUseCases;
use crate::modules::planning::application::ports::incoming::use_cases::*;
use crate::modules::portfolio::application::domain::{
    Portfolio, PortfolioDetails, PortfolioFilter, PortfolioLikes, PortfolioSort,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::*;
use crate::modules::reviews::application::domain::{
    HelpfulCounts, Review, ReviewChanges, ReviewFilter, ReviewRequest, ReviewSort,
    VendorReviewStats,
};
use crate::modules::reviews::application::ports::incoming::use_cases::*;
use crate::modules::reviews::application::review_use_cases::ReviewUseCases;
use crate::modules::vendors::application::domain::{
    Vendor, VendorFilter, VendorProfile, VendorSort,
};
use crate::modules::vendors::application::ports::incoming::use_cases::*;
use crate::modules::vendors::application::vendor_use_cases::VendorUseCases;
use crate::shared::pagination::{PageRequest, PageResult};

pub struct Unused;

fn unused() -> Arc<Unused> {
    Arc::new(Unused)
}

// ============================================================================
// Auth
// ============================================================================

#[async_trait]
impl RegisterUserUseCase for Unused {
    async fn execute(&self, _: RegisterUserCommand) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("register")
    }
}

#[async_trait]
impl LoginUserUseCase for Unused {
    async fn execute(&self, _: String, _: String) -> Result<AuthSession, LoginError> {
        unimplemented!("login")
    }
}

#[async_trait]
impl RefreshTokenUseCase for Unused {
    async fn execute(&self, _: String) -> Result<RefreshedToken, RefreshTokenError> {
        unimplemented!("refresh")
    }
}

#[async_trait]
impl VerifyEmailUseCase for Unused {
    async fn execute(&self, _: String) -> Result<User, VerifyEmailError> {
        unimplemented!("verify_email")
    }
}

#[async_trait]
impl GetProfileUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<User, ProfileError> {
        unimplemented!("get_profile")
    }
}

#[async_trait]
impl UpdateProfileUseCase for Unused {
    async fn execute(&self, _: Uuid, _: ProfileUpdate) -> Result<User, ProfileError> {
        unimplemented!("update_profile")
    }
}

#[async_trait]
impl ChangePasswordUseCase for Unused {
    async fn execute(&self, _: Uuid, _: ChangePasswordCommand) -> Result<(), ChangePasswordError> {
        unimplemented!("change_password")
    }
}

#[async_trait]
impl SuperAdminLoginUseCase for Unused {
    async fn execute(
        &self,
        _: String,
        _: String,
    ) -> Result<SuperAdminSession, SuperAdminLoginError> {
        unimplemented!("super_admin_login")
    }
}

impl AuthUseCases {
    pub fn unused() -> Self {
        Self {
            register: unused(),
            login: unused(),
            refresh: unused(),
            verify_email: unused(),
            get_profile: unused(),
            update_profile: unused(),
            change_password: unused(),
            super_admin_login: unused(),
        }
    }
}

// ============================================================================
// Vendors
// ============================================================================

#[async_trait]
impl CreateVendorUseCase for Unused {
    async fn execute(&self, _: Actor, _: VendorProfile) -> Result<Vendor, VendorError> {
        unimplemented!("create vendor")
    }
}

#[async_trait]
impl ListVendorsUseCase for Unused {
    async fn execute(
        &self,
        _: VendorFilter,
        _: VendorSort,
        _: PageRequest,
    ) -> Result<PageResult<Vendor>, VendorError> {
        unimplemented!("list vendors")
    }
}

#[async_trait]
impl GetVendorUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Vendor, VendorError> {
        unimplemented!("get vendor")
    }
}

#[async_trait]
impl GetMyVendorUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Vendor, VendorError> {
        unimplemented!("get own vendor")
    }
}

#[async_trait]
impl FeaturedVendorsUseCase for Unused {
    async fn execute(&self, _: u64) -> Result<Vec<Vendor>, VendorError> {
        unimplemented!("featured vendors")
    }
}

#[async_trait]
impl UpdateVendorUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: VendorProfile) -> Result<Vendor, VendorError> {
        unimplemented!("update vendor")
    }
}

#[async_trait]
impl DeleteVendorUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), VendorError> {
        unimplemented!("delete vendor")
    }
}

impl VendorUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            list: unused(),
            get: unused(),
            get_mine: unused(),
            featured: unused(),
            update: unused(),
            delete: unused(),
        }
    }
}

// ============================================================================
// Portfolio
// ============================================================================

#[async_trait]
impl CreatePortfolioUseCase for Unused {
    async fn execute(&self, _: Actor, _: PortfolioDetails) -> Result<Portfolio, PortfolioError> {
        unimplemented!("create portfolio")
    }
}

#[async_trait]
impl ListMyPortfolioUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: PortfolioFilter,
        _: PortfolioSort,
        _: PageRequest,
    ) -> Result<PageResult<Portfolio>, PortfolioError> {
        unimplemented!("list own portfolio")
    }
}

#[async_trait]
impl GetPortfolioUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Portfolio, PortfolioError> {
        unimplemented!("get portfolio")
    }
}

#[async_trait]
impl VendorPortfolioUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Vec<Portfolio>, PortfolioError> {
        unimplemented!("vendor portfolio")
    }
}

#[async_trait]
impl UpdatePortfolioUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: Uuid,
        _: PortfolioDetails,
    ) -> Result<Portfolio, PortfolioError> {
        unimplemented!("update portfolio")
    }
}

#[async_trait]
impl DeletePortfolioUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), PortfolioError> {
        unimplemented!("delete portfolio")
    }
}

#[async_trait]
impl LikePortfolioUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<PortfolioLikes, PortfolioError> {
        unimplemented!("like portfolio")
    }
}

impl PortfolioUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            list_mine: unused(),
            get: unused(),
            for_vendor: unused(),
            update: unused(),
            delete: unused(),
            like: unused(),
        }
    }
}

// ============================================================================
// Favorites
// ============================================================================

#[async_trait]
impl AddFavoriteUseCase for Unused {
    async fn execute(&self, _: Actor, _: FavoriteRequest) -> Result<Favorite, FavoriteError> {
        unimplemented!("add favorite")
    }
}

#[async_trait]
impl ListFavoritesUseCase for Unused {
    async fn execute(&self, _: Actor, _: Option<String>) -> Result<Vec<Favorite>, FavoriteError> {
        unimplemented!("list favorites")
    }
}

#[async_trait]
impl CheckFavoriteUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<FavoriteStatus, FavoriteError> {
        unimplemented!("check favorite")
    }
}

#[async_trait]
impl UpdateFavoriteUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: Uuid,
        _: FavoriteChanges,
    ) -> Result<Favorite, FavoriteError> {
        unimplemented!("update favorite")
    }
}

#[async_trait]
impl RemoveFavoriteUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), FavoriteError> {
        unimplemented!("remove favorite")
    }
}

#[async_trait]
impl RemoveVendorFavoriteUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), FavoriteError> {
        unimplemented!("remove vendor favorite")
    }
}

impl FavoriteUseCases {
    pub fn unused() -> Self {
        Self {
            add: unused(),
            list: unused(),
            check: unused(),
            update: unused(),
            remove: unused(),
            remove_by_vendor: unused(),
        }
    }
}

// ============================================================================
// Bookings
// ============================================================================

#[async_trait]
impl CreateBookingUseCase for Unused {
    async fn execute(&self, _: Actor, _: BookingRequest) -> Result<Booking, BookingError> {
        unimplemented!("create booking")
    }
}

#[async_trait]
impl ListBookingsUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: BookingFilter,
        _: BookingSort,
        _: PageRequest,
    ) -> Result<PageResult<Booking>, BookingError> {
        unimplemented!("list bookings")
    }
}

#[async_trait]
impl GetBookingUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<Booking, BookingError> {
        unimplemented!("get booking")
    }
}

#[async_trait]
impl BookingStatsUseCase for Unused {
    async fn execute(&self, _: Actor) -> Result<BookingStats, BookingError> {
        unimplemented!("booking stats")
    }
}

#[async_trait]
impl UpcomingBookingsUseCase for Unused {
    async fn execute(&self, _: Actor, _: u64) -> Result<Vec<Booking>, BookingError> {
        unimplemented!("upcoming bookings")
    }
}

#[async_trait]
impl UpdateBookingUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: BookingChanges) -> Result<Booking, BookingError> {
        unimplemented!("update booking")
    }
}

#[async_trait]
impl DeleteBookingUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), BookingError> {
        unimplemented!("delete booking")
    }
}

impl BookingUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            list: unused(),
            get: unused(),
            stats: unused(),
            upcoming: unused(),
            update: unused(),
            delete: unused(),
        }
    }
}

// ============================================================================
// Reviews
// ============================================================================

#[async_trait]
impl CreateReviewUseCase for Unused {
    async fn execute(&self, _: Actor, _: ReviewRequest) -> Result<Review, ReviewError> {
        unimplemented!("create review")
    }
}

#[async_trait]
impl ListReviewsUseCase for Unused {
    async fn execute(
        &self,
        _: ReviewFilter,
        _: ReviewSort,
        _: PageRequest,
    ) -> Result<PageResult<Review>, ReviewError> {
        unimplemented!("list reviews")
    }
}

#[async_trait]
impl GetReviewUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Review, ReviewError> {
        unimplemented!("get review")
    }
}

#[async_trait]
impl VendorReviewStatsUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<VendorReviewStats, ReviewError> {
        unimplemented!("vendor review stats")
    }
}

#[async_trait]
impl UpdateReviewUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: ReviewChanges) -> Result<Review, ReviewError> {
        unimplemented!("update review")
    }
}

#[async_trait]
impl DeleteReviewUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), ReviewError> {
        unimplemented!("delete review")
    }
}

#[async_trait]
impl RespondToReviewUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: String) -> Result<Review, ReviewError> {
        unimplemented!("respond to review")
    }
}

#[async_trait]
impl MarkReviewHelpfulUseCase for Unused {
    async fn execute(&self, _: Uuid, _: bool) -> Result<HelpfulCounts, ReviewError> {
        unimplemented!("mark review helpful")
    }
}

impl ReviewUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            list: unused(),
            get: unused(),
            vendor_stats: unused(),
            update: unused(),
            delete: unused(),
            respond: unused(),
            helpful: unused(),
        }
    }
}

// ============================================================================
// Ideas
// ============================================================================

#[async_trait]
impl CreateIdeaUseCase for Unused {
    async fn execute(&self, _: Actor, _: IdeaRequest) -> Result<Idea, IdeaError> {
        unimplemented!("create_idea")
    }
}

#[async_trait]
impl ListIdeasUseCase for Unused {
    async fn execute(
        &self,
        _: IdeaFilter,
        _: IdeaSort,
        _: PageRequest,
    ) -> Result<PageResult<Idea>, IdeaError> {
        unimplemented!("list_ideas")
    }
}

#[async_trait]
impl GetIdeaUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Idea, IdeaError> {
        unimplemented!("get_idea")
    }
}

#[async_trait]
impl TrendingIdeasUseCase for Unused {
    async fn execute(&self, _: u64) -> Result<Vec<TrendingIdea>, IdeaError> {
        unimplemented!("trending_ideas")
    }
}

#[async_trait]
impl RelatedIdeasUseCase for Unused {
    async fn execute(&self, _: Uuid, _: u64) -> Result<Vec<Idea>, IdeaError> {
        unimplemented!("related_ideas")
    }
}

#[async_trait]
impl UpdateIdeaUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: IdeaChanges) -> Result<Idea, IdeaError> {
        unimplemented!("update_idea")
    }
}

#[async_trait]
impl DeleteIdeaUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), IdeaError> {
        unimplemented!("delete_idea")
    }
}

#[async_trait]
impl LikeIdeaUseCase for Unused {
    async fn execute(&self, _: Uuid, _: bool) -> Result<LikeOutcome, IdeaError> {
        unimplemented!("like_idea")
    }
}

#[async_trait]
impl ShareIdeaUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<i32, IdeaError> {
        unimplemented!("share_idea")
    }
}

impl IdeaUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            list: unused(),
            get: unused(),
            trending: unused(),
            related: unused(),
            update: unused(),
            delete: unused(),
            like: unused(),
            share: unused(),
        }
    }
}

// ============================================================================
// Planning
// ============================================================================

#[async_trait]
impl CreatePlanningUseCase for Unused {
    async fn execute(&self, _: Uuid, _: PlanningRequest) -> Result<Planning, PlanningError> {
        unimplemented!("create_planning")
    }
}

#[async_trait]
impl GetPlanningUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<Planning, PlanningError> {
        unimplemented!("get_planning")
    }
}

#[async_trait]
impl UpdatePlanningUseCase for Unused {
    async fn execute(&self, _: Uuid, _: PlanningChanges) -> Result<Planning, PlanningError> {
        unimplemented!("update_planning")
    }
}

#[async_trait]
impl DeletePlanningUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<(), PlanningError> {
        unimplemented!("delete_planning")
    }
}

#[async_trait]
impl PlanningStatsUseCase for Unused {
    async fn execute(&self, _: Uuid) -> Result<PlanningStats, PlanningError> {
        unimplemented!("planning_stats")
    }
}

#[async_trait]
impl AddPlanningItemsUseCase for Unused {
    async fn execute(&self, _: Uuid, _: SectionItems) -> Result<Planning, PlanningError> {
        unimplemented!("add_planning_items")
    }
}

#[async_trait]
impl UpdatePlanningItemUseCase for Unused {
    async fn execute(
        &self,
        _: Uuid,
        _: Uuid,
        _: SectionItemChanges,
    ) -> Result<Planning, PlanningError> {
        unimplemented!("update_planning_item")
    }
}

#[async_trait]
impl RemovePlanningItemUseCase for Unused {
    async fn execute(
        &self,
        _: Uuid,
        _: PlanningSection,
        _: Uuid,
    ) -> Result<Planning, PlanningError> {
        unimplemented!("remove_planning_item")
    }
}

impl PlanningUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            get: unused(),
            update: unused(),
            delete: unused(),
            stats: unused(),
            add_items: unused(),
            update_item: unused(),
            remove_item: unused(),
        }
    }
}

// ============================================================================
// Inquiries
// ============================================================================

#[async_trait]
impl CreateInquiryUseCase for Unused {
    async fn execute(&self, _: Actor, _: InquiryRequest) -> Result<Inquiry, InquiryError> {
        unimplemented!("create_inquiry")
    }
}

#[async_trait]
impl ListInquiriesUseCase for Unused {
    async fn execute(
        &self,
        _: Actor,
        _: InquiryFilter,
        _: InquirySort,
        _: PageRequest,
    ) -> Result<PageResult<Inquiry>, InquiryError> {
        unimplemented!("list_inquiries")
    }
}

#[async_trait]
impl GetInquiryUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<Inquiry, InquiryError> {
        unimplemented!("get_inquiry")
    }
}

#[async_trait]
impl UnreadCountUseCase for Unused {
    async fn execute(&self, _: Actor) -> Result<u64, InquiryError> {
        unimplemented!("unread_count")
    }
}

#[async_trait]
impl RecentInquiriesUseCase for Unused {
    async fn execute(&self, _: Actor, _: u64) -> Result<Vec<Inquiry>, InquiryError> {
        unimplemented!("recent_inquiries")
    }
}

#[async_trait]
impl AddInquiryMessageUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: MessageRequest) -> Result<Inquiry, InquiryError> {
        unimplemented!("add_inquiry_message")
    }
}

#[async_trait]
impl MarkInquiryReadUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), InquiryError> {
        unimplemented!("mark_inquiry_read")
    }
}

#[async_trait]
impl UpdateInquiryStatusUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid, _: StatusChange) -> Result<Inquiry, InquiryError> {
        unimplemented!("update_inquiry_status")
    }
}

#[async_trait]
impl DeleteInquiryUseCase for Unused {
    async fn execute(&self, _: Actor, _: Uuid) -> Result<(), InquiryError> {
        unimplemented!("delete_inquiry")
    }
}

impl InquiryUseCases {
    pub fn unused() -> Self {
        Self {
            create: unused(),
            list: unused(),
            get: unused(),
            unread_count: unused(),
            recent: unused(),
            add_message: unused(),
            mark_read: unused(),
            update_status: unused(),
            delete: unused(),
        }
    }
}

// ============================================================================
// Admin
// ============================================================================

#[async_trait]
impl DashboardUseCase for Unused {
    async fn execute(&self, _: DashboardParams) -> Result<DashboardStats, AdminError> {
        unimplemented!("dashboard")
    }
}

#[async_trait]
impl RecentActivityUseCase for Unused {
    async fn execute(&self, _: ActivityParams) -> Result<Vec<ActivityItem>, AdminError> {
        unimplemented!("recent_activity")
    }
}

#[async_trait]
impl AnalyticsUseCase for Unused {
    async fn execute(&self, _: DashboardParams) -> Result<Analytics, AdminError> {
        unimplemented!("analytics")
    }
}

#[async_trait]
impl ListUsersUseCase for Unused {
    async fn execute(
        &self,
        _: UserListFilter,
        _: UserSort,
        _: PageRequest,
    ) -> Result<PageResult<User>, AdminError> {
        unimplemented!("list_users")
    }
}

#[async_trait]
impl ListContentUseCase for Unused {
    async fn execute(
        &self,
        _: ContentFilter,
        _: ContentSort,
        _: PageRequest,
    ) -> Result<PageResult<Idea>, AdminError> {
        unimplemented!("list_content")
    }
}

#[async_trait]
impl ListVendorsForReviewUseCase for Unused {
    async fn execute(
        &self,
        _: VendorFilter,
        _: VendorSort,
        _: PageRequest,
    ) -> Result<PageResult<Vendor>, AdminError> {
        unimplemented!("list_vendors_for_review")
    }
}

#[async_trait]
impl UpdateVendorStatusUseCase for Unused {
    async fn execute(&self, _: Uuid, _: Uuid, _: VendorStatusChange) -> Result<Vendor, AdminError> {
        unimplemented!("update_vendor_status")
    }
}

#[async_trait]
impl UpdateContentStatusUseCase for Unused {
    async fn execute(&self, _: Uuid, _: ContentStatusChange) -> Result<Idea, AdminError> {
        unimplemented!("update_content_status")
    }
}

#[async_trait]
impl UpdateUserStatusUseCase for Unused {
    async fn execute(&self, _: Uuid, _: UserStatusChange) -> Result<User, AdminError> {
        unimplemented!("update_user_status")
    }
}

#[async_trait]
impl SetFeaturedUseCase for Unused {
    async fn execute(&self, _: FeaturedChange) -> Result<(), AdminError> {
        unimplemented!("set_featured")
    }
}

impl AdminUseCases {
    pub fn unused() -> Self {
        Self {
            dashboard: unused(),
            recent_activity: unused(),
            analytics: unused(),
            list_users: unused(),
            list_content: unused(),
            list_vendors: unused(),
            update_vendor_status: unused(),
            update_content_status: unused(),
            update_user_status: unused(),
            set_featured: unused(),
        }
    }
}
