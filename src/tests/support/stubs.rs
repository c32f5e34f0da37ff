use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher,
};
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, VERIFICATION_TOKEN,
};
use crate::modules::bookings::application::domain::{
    Booking, BookingRef, BookingStatus, PaymentStatus,
};
use crate::modules::bookings::application::ports::outgoing::{BookingLookup, BookingLookupError};
use crate::modules::email::application::ports::incoming::{AccountNotifier, VendorNotifier};
use crate::modules::email::application::ports::outgoing::EmailError;
use crate::modules::favorites::application::domain::{Favorite, FavoriteVendor};
use crate::modules::ideas::application::domain::{Idea, IdeaCategory, IdeaType};
use crate::modules::inquiries::application::domain::{Inquiry, InquiryMessage, InquiryStatus};
use crate::modules::planning::application::domain::{Planning, PlanningProgress};
use crate::modules::portfolio::application::domain::{Portfolio, PortfolioItem};
use crate::modules::reviews::application::domain::Review;
use crate::modules::vendors::application::domain::{
    Vendor, VendorCategory, VendorRef, VendorStatus,
};
use crate::modules::vendors::application::ports::outgoing::{VendorLookup, VendorLookupError};

pub fn sample_user(id: Uuid, role: Role) -> User {
    let now = Utc::now();
    User {
        id,
        email: "user@example.com".to_string(),
        password_hash: "hashed:password123".to_string(),
        name: "Sample User".to_string(),
        role,
        phone: None,
        address: None,
        city: None,
        wedding_date: None,
        budget: None,
        is_verified: true,
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// Approved, active vendor owned by `user_id`.
pub fn sample_vendor(id: Uuid, user_id: Uuid) -> Vendor {
    let now = Utc::now();
    Vendor {
        id,
        user_id,
        business_name: "Lotus Studio".to_string(),
        business_description: None,
        categories: vec![VendorCategory::Photography],
        district: "Colombo".to_string(),
        city: None,
        address: None,
        phone: None,
        website: None,
        facebook: None,
        instagram: None,
        logo_url: None,
        cover_image_url: None,
        price_range: None,
        languages: vec![],
        specializations: vec![],
        experience_years: None,
        team_size: None,
        status: VendorStatus::Approved,
        is_verified: false,
        is_featured: false,
        featured_at: None,
        rating: 0.0,
        review_count: 0,
        view_count: 3,
        inquiry_count: 0,
        booking_count: 0,
        rejection_reason: None,
        approved_at: Some(now),
        approved_by: None,
        created_at: now,
        updated_at: now,
    }
}

/// Pending, unpaid booking of 100 000 LKR.
pub fn sample_booking(id: Uuid, customer_id: Uuid, vendor_id: Uuid) -> Booking {
    let now = Utc::now();
    Booking {
        id,
        customer_id,
        vendor_id,
        service_name: "Full day photography".to_string(),
        service_category: "photography".to_string(),
        booking_date: now.date_naive() + chrono::Days::new(30),
        end_date: None,
        start_time: Some("09:00".to_string()),
        end_time: None,
        venue: None,
        guest_count: None,
        total_amount: 100_000.0,
        currency: "LKR".to_string(),
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        paid_amount: 0.0,
        remaining_amount: 100_000.0,
        packages: vec![],
        special_requirements: None,
        notes: None,
        cancellation_reason: None,
        cancelled_at: None,
        cancelled_by: None,
        completed_at: None,
        created_at: now,
        updated_at: now,
    }
}

/// Pending inquiry holding only the customer's unread opening message.
pub fn sample_inquiry(id: Uuid, customer_id: Uuid, vendor_id: Uuid) -> Inquiry {
    let now = Utc::now();
    Inquiry {
        id,
        customer_id,
        vendor_id,
        subject: "Availability for February".to_string(),
        message: "Are you free on 14 February?".to_string(),
        attachments: vec![],
        status: InquiryStatus::Pending,
        messages: vec![InquiryMessage {
            id: Uuid::new_v4(),
            sender_id: customer_id,
            message: "Are you free on 14 February?".to_string(),
            attachments: vec![],
            is_read: false,
            read_at: None,
            created_at: now,
        }],
        wedding_date: None,
        guest_count: None,
        budget: None,
        venue: None,
        special_requirements: None,
        preferred_contact_method: None,
        urgency: None,
        last_message_at: now,
        closed_at: None,
        closed_by: None,
        closed_reason: None,
        created_at: now,
        updated_at: now,
    }
}

/// Verified, published five-star review.
pub fn sample_review(id: Uuid, customer_id: Uuid, vendor_id: Uuid) -> Review {
    let now = Utc::now();
    Review {
        id,
        customer_id,
        vendor_id,
        booking_id: Uuid::new_v4(),
        rating: 5,
        title: Some("Beautiful photos".to_string()),
        comment: Some("Captured every moment".to_string()),
        images: vec![],
        service_category: Some("photography".to_string()),
        pros: vec![],
        cons: vec![],
        would_recommend: None,
        quality_rating: None,
        value_rating: None,
        communication_rating: None,
        timeliness_rating: None,
        helpful_count: 0,
        not_helpful_count: 0,
        vendor_response: None,
        vendor_response_at: None,
        is_verified: true,
        is_published: true,
        published_at: Some(now),
        created_at: now,
        updated_at: now,
    }
}

/// Unpublished draft with no engagement.
pub fn sample_idea(id: Uuid, author_id: Uuid) -> Idea {
    let now = Utc::now();
    Idea {
        id,
        title: "Lotus centrepieces".to_string(),
        content: "Floating lotus bowls for the reception tables".to_string(),
        excerpt: None,
        idea_type: IdeaType::Tutorial,
        category: IdeaCategory::Decoration,
        tags: vec!["flowers".to_string()],
        images: vec![],
        featured_image: None,
        video_url: None,
        author_id,
        author_name: "Lotus Studio".to_string(),
        author_role: "vendor".to_string(),
        view_count: 0,
        like_count: 0,
        share_count: 0,
        is_published: false,
        published_at: None,
        is_featured: false,
        featured_at: None,
        reading_time: Some(3),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_planning(id: Uuid, user_id: Uuid) -> Planning {
    let now = Utc::now();
    Planning {
        id,
        user_id,
        wedding_date: NaiveDate::from_ymd_opt(2026, 12, 5).unwrap(),
        venue: Some("Galle Face Hotel".to_string()),
        guest_count: Some(250),
        budget: Some(3_000_000.0),
        style: None,
        theme: None,
        colors: vec!["ivory".to_string()],
        notes: None,
        budget_items: vec![],
        guests: vec![],
        timeline: vec![],
        checklist: vec![],
        progress: PlanningProgress::default(),
        created_at: now,
        updated_at: now,
    }
}

/// Active project with one picture and no engagement.
pub fn sample_portfolio(id: Uuid, vendor_id: Uuid) -> Portfolio {
    let now = Utc::now();
    Portfolio {
        id,
        vendor_id,
        title: "Sunset wedding at Bentota".to_string(),
        description: Some("Beach ceremony for 120 guests".to_string()),
        category: Some("photography".to_string()),
        tags: vec!["outdoor".to_string()],
        items: vec![PortfolioItem {
            image_url: "https://cdn.example.com/portfolio/bentota-1.jpg".to_string(),
            caption: None,
            alt_text: None,
            position: 0,
            is_primary: true,
        }],
        project_date: NaiveDate::from_ymd_opt(2026, 3, 14),
        venue: Some("Bentota Beach".to_string()),
        client_name: None,
        budget: None,
        duration: None,
        team_size: Some(3),
        challenges: None,
        solutions: None,
        testimonials: None,
        is_featured: false,
        view_count: 0,
        like_count: 0,
        created_at: now,
        updated_at: now,
    }
}

/// Saved vendor with its summary attached.
pub fn sample_favorite(id: Uuid, user_id: Uuid, vendor_id: Uuid) -> Favorite {
    let now = Utc::now();
    Favorite {
        id,
        user_id,
        vendor_id,
        notes: None,
        category: Some("photography".to_string()),
        created_at: now,
        updated_at: now,
        vendor: Some(FavoriteVendor {
            id: vendor_id,
            business_name: "Lotus Studio".to_string(),
            business_description: None,
            categories: vec![VendorCategory::Photography],
            district: "Colombo".to_string(),
            rating: 4.5,
            review_count: 12,
            price_range: None,
            logo_url: None,
        }),
    }
}

pub fn claims_for(user_id: Uuid, role: Role, token_type: &str) -> TokenClaims {
    let now = Utc::now().timestamp();
    TokenClaims {
        sub: user_id,
        iss: "test".to_string(),
        exp: now + 3600,
        iat: now,
        nbf: now,
        token_type: token_type.to_string(),
        role,
        is_verified: true,
    }
}

// ============================================================================
// Password hashing
// ============================================================================

/// Deterministic hasher: `hash(pw) == "hashed:{pw}"`.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

// ============================================================================
// Tokens
// ============================================================================

/// Issues fixed token strings and answers `verify_token` with preset claims.
#[derive(Default)]
pub struct StubTokenProvider {
    claims: Option<TokenClaims>,
}

impl StubTokenProvider {
    pub fn with_claims(claims: TokenClaims) -> Self {
        Self {
            claims: Some(claims),
        }
    }

    /// Every token fails verification.
    pub fn rejecting() -> Self {
        Self { claims: None }
    }

    fn claims(&self) -> Result<TokenClaims, TokenError> {
        self.claims.clone().ok_or(TokenError::InvalidSignature)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _: Uuid, _: Role, _: bool) -> Result<String, TokenError> {
        Ok("access-token".to_string())
    }

    fn generate_refresh_token(&self, _: Uuid, _: Role, _: bool) -> Result<String, TokenError> {
        Ok("refresh-token".to_string())
    }

    fn verify_token(&self, _: &str) -> Result<TokenClaims, TokenError> {
        self.claims()
    }

    fn refresh_access_token(&self, _: &str) -> Result<String, TokenError> {
        self.claims().map(|_| "access-token".to_string())
    }

    fn generate_verification_token(&self, _: Uuid, _: Role) -> Result<String, TokenError> {
        Ok("verification-token".to_string())
    }

    fn verify_verification_token(&self, _: &str) -> Result<Uuid, TokenError> {
        let claims = self.claims()?;
        if claims.token_type != VERIFICATION_TOKEN {
            return Err(TokenError::InvalidTokenType(VERIFICATION_TOKEN.to_string()));
        }
        Ok(claims.sub)
    }
}

// ============================================================================
// Notifiers
// ============================================================================

#[derive(Default)]
pub struct RecordingAccountNotifier {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingAccountNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountNotifier for RecordingAccountNotifier {
    async fn send_verification_email(
        &self,
        to: &str,
        _name: &str,
        _verification_token: &str,
    ) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Transport("smtp down".into()));
        }
        self.sent.lock().unwrap().push(to.to_string());
        Ok(())
    }
}

/// Records `(to, "approved" | "rejected")` pairs.
#[derive(Default)]
pub struct RecordingVendorNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl RecordingVendorNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, to: &str, kind: &str) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Transport("smtp down".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), kind.to_string()));
        Ok(())
    }
}

#[async_trait]
impl VendorNotifier for RecordingVendorNotifier {
    async fn send_vendor_approved(&self, to: &str, _business_name: &str) -> Result<(), EmailError> {
        self.record(to, "approved")
    }

    async fn send_vendor_rejected(
        &self,
        to: &str,
        _business_name: &str,
        _reason: Option<&str>,
    ) -> Result<(), EmailError> {
        self.record(to, "rejected")
    }
}

// ============================================================================
// Vendor lookup
// ============================================================================

/// Knows a fixed set of active vendors.
#[derive(Default)]
pub struct StubVendorLookup {
    vendors: Vec<VendorRef>,
}

impl StubVendorLookup {
    /// One approved vendor `vendor_id` owned by `owner`.
    pub fn owned(vendor_id: Uuid, owner: Uuid) -> Self {
        Self {
            vendors: vec![VendorRef {
                id: vendor_id,
                user_id: owner,
                business_name: "Lotus Studio".to_string(),
                status: VendorStatus::Approved,
            }],
        }
    }
}

#[async_trait]
impl VendorLookup for StubVendorLookup {
    async fn find_active(&self, vendor_id: Uuid) -> Result<Option<VendorRef>, VendorLookupError> {
        Ok(self.vendors.iter().find(|v| v.id == vendor_id).cloned())
    }

    async fn find_by_owner(&self, user_id: Uuid) -> Result<Option<VendorRef>, VendorLookupError> {
        Ok(self.vendors.iter().find(|v| v.user_id == user_id).cloned())
    }
}

// ============================================================================
// Booking lookup
// ============================================================================

#[derive(Default)]
pub struct StubBookingLookup {
    bookings: Vec<BookingRef>,
}

impl StubBookingLookup {
    pub fn with(id: Uuid, customer_id: Uuid, vendor_id: Uuid, status: BookingStatus) -> Self {
        Self {
            bookings: vec![BookingRef {
                id,
                customer_id,
                vendor_id,
                status,
            }],
        }
    }
}

#[async_trait]
impl BookingLookup for StubBookingLookup {
    async fn find_active(&self, booking_id: Uuid) -> Result<Option<BookingRef>, BookingLookupError> {
        Ok(self.bookings.iter().find(|b| b.id == booking_id).cloned())
    }
}
