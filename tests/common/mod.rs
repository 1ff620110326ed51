#![allow(dead_code)]

use std::time::Duration;

use lightbnb::{
    config::DatabaseSettings,
    db::{DbPool, create_lazy_pool},
    dto::{properties::NewProperty, users::NewUser},
    models::{Property, User},
    services::{property_service, user_service},
};
use sqlx::postgres::PgPoolOptions;

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Connects to the test database, loads the schema and empties every table.
///
/// Returns `None` when no database is configured so the caller can skip.
pub async fn setup_pool() -> anyhow::Result<Option<DbPool>> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run DB tests.");
            return Ok(None);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    // Prepared statements cannot hold several commands, so run them one by one.
    for stmt in SCHEMA.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        sqlx::query(stmt).execute(&pool).await?;
    }

    sqlx::query(
        "TRUNCATE TABLE property_reviews, reservations, properties, users RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(Some(pool))
}

/// A pool aimed at a closed port; queries fail fast once issued.
pub fn unreachable_pool() -> DbPool {
    let settings = DatabaseSettings {
        host: "127.0.0.1".into(),
        port: 1,
        acquire_timeout: Duration::from_millis(500),
        ..Default::default()
    };
    create_lazy_pool(&settings).expect("lazy pool")
}

pub async fn create_user(pool: &DbPool, name: &str, email: &str) -> anyhow::Result<User> {
    let user = user_service::add_user(
        pool,
        NewUser {
            name: name.into(),
            email: email.into(),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".into(),
        },
    )
    .await?;
    Ok(user)
}

pub fn new_property(owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> NewProperty {
    NewProperty {
        title: title.into(),
        description: format!("{title} description"),
        number_of_bedrooms: 2,
        number_of_bathrooms: 1,
        parking_spaces: 1,
        cost_per_night,
        thumbnail_photo_url: "https://images.example.com/thumb.jpg".into(),
        cover_photo_url: "https://images.example.com/cover.jpg".into(),
        street: "536 Namsub Highway".into(),
        country: "Canada".into(),
        city: city.into(),
        province: "British Columbia".into(),
        post_code: "28142".into(),
        owner_id,
    }
}

pub async fn create_property(
    pool: &DbPool,
    owner_id: i32,
    title: &str,
    city: &str,
    cost_per_night: i32,
) -> anyhow::Result<Property> {
    let property =
        property_service::add_property(pool, new_property(owner_id, title, city, cost_per_night))
            .await?;
    Ok(property)
}

/// Inserts a review; returns nothing since reviews are only read in aggregate.
pub async fn add_review(
    pool: &DbPool,
    guest_id: i32,
    property_id: i32,
    rating: i16,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO property_reviews (guest_id, property_id, rating) VALUES ($1, $2, $3)")
        .bind(guest_id)
        .bind(property_id)
        .bind(rating)
        .execute(pool)
        .await?;
    Ok(())
}

/// Inserts a reservation with dates relative to today, returning its id.
pub async fn add_reservation(
    pool: &DbPool,
    guest_id: i32,
    property_id: i32,
    start_offset_days: i32,
    end_offset_days: i32,
) -> anyhow::Result<i32> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO reservations (guest_id, property_id, start_date, end_date)
        VALUES ($1, $2, CURRENT_DATE + $3::int, CURRENT_DATE + $4::int)
        RETURNING id
        "#,
    )
    .bind(guest_id)
    .bind(property_id)
    .bind(start_offset_days)
    .bind(end_offset_days)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
