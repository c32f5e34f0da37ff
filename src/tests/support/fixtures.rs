//! Database row fixtures for `MockDatabase` tests.

use chrono::{NaiveDate, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::bookings::adapter::outgoing::sea_orm_entity::bookings;
use crate::modules::favorites::adapter::outgoing::sea_orm_entity::favorites;
use crate::modules::ideas::adapter::outgoing::sea_orm_entity::ideas;
use crate::modules::inquiries::adapter::outgoing::sea_orm_entity::inquiries;
use crate::modules::planning::adapter::outgoing::sea_orm_entity::plannings;
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios;
use crate::modules::reviews::adapter::outgoing::sea_orm_entity::reviews;
use crate::modules::vendors::adapter::outgoing::sea_orm_entity::vendors;

pub fn user_model(id: Uuid, role: &str) -> users::Model {
    let now = Utc::now().fixed_offset();
    users::Model {
        id,
        email: "user@example.com".into(),
        password_hash: "hash".into(),
        name: "Sample User".into(),
        role: role.into(),
        phone: None,
        address: None,
        city: None,
        wedding_date: None,
        budget: None,
        is_verified: false,
        is_active: true,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn vendor_model(id: Uuid, user_id: Uuid, status: &str) -> vendors::Model {
    let now = Utc::now().fixed_offset();
    vendors::Model {
        id,
        user_id,
        business_name: "Lotus Studio".into(),
        business_description: Some("Wedding photography".into()),
        categories: json!(["photography"]),
        district: "Colombo".into(),
        city: None,
        address: None,
        phone: None,
        website: None,
        facebook: None,
        instagram: None,
        logo_url: None,
        cover_image_url: None,
        price_min: None,
        price_max: None,
        price_currency: None,
        languages: json!([]),
        specializations: json!([]),
        experience_years: None,
        team_size: None,
        status: status.into(),
        is_verified: false,
        is_featured: false,
        featured_at: None,
        rating: 0.0,
        review_count: 0,
        view_count: 0,
        inquiry_count: 0,
        booking_count: 0,
        rejection_reason: None,
        approved_at: None,
        approved_by: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn booking_model(id: Uuid, customer_id: Uuid, vendor_id: Uuid) -> bookings::Model {
    let now = Utc::now().fixed_offset();
    bookings::Model {
        id,
        customer_id,
        vendor_id,
        service_name: "Full day photography".into(),
        service_category: "photography".into(),
        booking_date: NaiveDate::from_ymd_opt(2027, 2, 14).unwrap(),
        end_date: None,
        start_time: Some("09:00".into()),
        end_time: None,
        venue: Some("Mount Lavinia Hotel".into()),
        guest_count: Some(200),
        total_amount: 100_000.0,
        currency: "LKR".into(),
        status: "pending".into(),
        payment_status: "pending".into(),
        paid_amount: 0.0,
        remaining_amount: 100_000.0,
        packages: json!([{ "name": "Gold", "price": 100000.0, "inclusions": ["album"] }]),
        special_requirements: None,
        notes: None,
        cancellation_reason: None,
        cancelled_at: None,
        cancelled_by: None,
        completed_at: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn review_model(id: Uuid, customer_id: Uuid, vendor_id: Uuid) -> reviews::Model {
    let now = Utc::now().fixed_offset();
    reviews::Model {
        id,
        customer_id,
        vendor_id,
        booking_id: Uuid::new_v4(),
        rating: 5,
        title: Some("Beautiful photos".into()),
        comment: Some("Captured every moment of the day.".into()),
        images: json!([]),
        service_category: Some("photography".into()),
        pros: json!(["Punctual"]),
        cons: json!([]),
        would_recommend: Some(true),
        quality_rating: Some(5),
        value_rating: Some(4),
        communication_rating: None,
        timeliness_rating: None,
        helpful_count: 0,
        not_helpful_count: 0,
        vendor_response: None,
        vendor_response_at: None,
        is_verified: true,
        is_published: true,
        published_at: Some(now),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn idea_model(id: Uuid, author_id: Uuid) -> ideas::Model {
    let now = Utc::now().fixed_offset();
    ideas::Model {
        id,
        title: "Lotus arches".into(),
        content: "Soak the stems overnight.".into(),
        excerpt: None,
        idea_type: "tutorial".into(),
        category: "decoration".into(),
        tags: json!(["flowers"]),
        images: json!([]),
        featured_image: None,
        video_url: None,
        author_id,
        author_name: "Lotus Studio".into(),
        author_role: "vendor".into(),
        view_count: 0,
        like_count: 0,
        share_count: 0,
        is_published: false,
        published_at: None,
        is_featured: false,
        featured_at: None,
        reading_time: Some(3),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn planning_model(id: Uuid, user_id: Uuid) -> plannings::Model {
    let now = Utc::now().fixed_offset();
    plannings::Model {
        id,
        user_id,
        wedding_date: NaiveDate::from_ymd_opt(2026, 12, 5).unwrap(),
        venue: Some("Galle Face Hotel".into()),
        guest_count: Some(250),
        budget: Some(3_000_000.0),
        style: None,
        theme: None,
        colors: json!(["ivory"]),
        notes: None,
        budget_items: json!([]),
        guests: json!([]),
        timeline: json!([]),
        checklist: json!([]),
        budget_progress: 0,
        guests_progress: 0,
        timeline_progress: 0,
        checklist_progress: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn inquiry_model(id: Uuid, customer_id: Uuid, vendor_id: Uuid) -> inquiries::Model {
    let now = Utc::now().fixed_offset();
    inquiries::Model {
        id,
        customer_id,
        vendor_id,
        subject: "Availability for February".into(),
        message: "Are you free on 14 February?".into(),
        attachments: json!([]),
        status: "pending".into(),
        messages: json!([{
            "id": Uuid::new_v4(),
            "sender_id": customer_id,
            "message": "Are you free on 14 February?",
            "attachments": [],
            "is_read": false,
            "read_at": null,
            "created_at": now.to_rfc3339(),
        }]),
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
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn portfolio_model(id: Uuid, vendor_id: Uuid) -> portfolios::Model {
    let now = Utc::now().fixed_offset();
    portfolios::Model {
        id,
        vendor_id,
        title: "Sunset wedding at Bentota".into(),
        description: None,
        category: Some("photography".into()),
        tags: json!(["outdoor"]),
        items: json!([{ "image_url": "https://cdn.example.com/a.jpg", "caption": null, "alt_text": null, "position": 0, "is_primary": true }]),
        project_date: NaiveDate::from_ymd_opt(2026, 3, 14),
        venue: Some("Bentota Beach".into()),
        client_name: None,
        budget: None,
        duration: None,
        team_size: None,
        challenges: None,
        solutions: None,
        testimonials: None,
        is_featured: false,
        view_count: 0,
        like_count: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn favorite_model(id: Uuid, user_id: Uuid, vendor_id: Uuid) -> favorites::Model {
    let now = Utc::now().fixed_offset();
    favorites::Model {
        id,
        user_id,
        vendor_id,
        notes: Some("Call after Poya".into()),
        category: Some("photography".into()),
        created_at: now,
        updated_at: now,
    }
}
