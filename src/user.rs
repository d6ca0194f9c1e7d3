use crate::orm::users;
use crate::session::get_argon2;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, DbErr};

/// A user as seen by request handlers. Everything the cross-cutting layer
/// needs, nothing it doesn't (no password hash).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub id: i32,
    pub username: String,
    pub role: users::Role,
}

impl Profile {
    pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self>, DbErr> {
        Ok(users::Entity::find_by_id(id).one(db).await?.map(|user| Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }))
    }

    pub fn is_admin(&self) -> bool {
        self.role == users::Role::Admin
    }
}

pub async fn get_user_by_name(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Username.eq(username))
        .one(db)
        .await
}

/// Hash a password with the shared Argon2 instance.
pub fn hash_password(argon2: &Argon2<'_>, password: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(format!("Password hashing failed: {}", e)))
}

/// Insert a new user with a hashed password.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    role: users::Role,
) -> Result<users::Model, DbErr> {
    let password = hash_password(get_argon2(), password)?;

    let user = users::ActiveModel {
        username: Set(username.to_owned()),
        password: Set(password),
        role: Set(role),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    user.insert(db).await
}
