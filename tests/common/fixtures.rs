//! Test fixtures for creating test data
#![allow(dead_code)]

use chrono::Utc;
use sea_orm::{entity::*, DatabaseConnection, DbErr};
use storefront::orm::{orders, products, transaction_log, users};

/// Test user fixture
pub struct TestUser {
    pub id: i32,
    pub username: String,
    pub password: String, // Plain text password for testing
}

/// Create a test user with known credentials
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<TestUser, DbErr> {
    create_test_user_with_role(db, username, password, users::Role::User).await
}

/// Create a test admin with known credentials
pub async fn create_test_admin(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<TestUser, DbErr> {
    create_test_user_with_role(db, username, password, users::Role::Admin).await
}

pub async fn create_test_user_with_role(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    role: users::Role,
) -> Result<TestUser, DbErr> {
    let user = storefront::user::create_user(db, username, password, role).await?;

    Ok(TestUser {
        id: user.id,
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    stock: i32,
) -> Result<products::Model, DbErr> {
    products::ActiveModel {
        name: Set(name.to_string()),
        price: Set(price),
        stock: Set(stock),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_test_order(
    db: &DatabaseConnection,
    customer_name: &str,
    total_amount: f64,
    status: &str,
) -> Result<orders::Model, DbErr> {
    orders::ActiveModel {
        customer_name: Set(customer_name.to_string()),
        total_amount: Set(total_amount),
        status: Set(status.to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_test_transaction(
    db: &DatabaseConnection,
    description: &str,
    amount: f64,
) -> Result<transaction_log::Model, DbErr> {
    transaction_log::ActiveModel {
        description: Set(description.to_string()),
        amount: Set(amount),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
