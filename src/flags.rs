//! Persisted feature flags.
//!
//! A flag gates availability of a handler: when it is off or missing, the
//! handler short-circuits to a "feature disabled" page. Flags are read from
//! the database on every check so toggles take effect immediately.

use crate::db::get_db_pool;
use crate::orm::feature_flags;
use sea_orm::{entity::*, DbErr};

/// Is the named flag present and active? Missing flags read as off.
pub async fn is_enabled(name: &str) -> Result<bool, DbErr> {
    let flag = feature_flags::Entity::find_by_id(name.to_owned())
        .one(get_db_pool())
        .await?;

    Ok(flag.map(|f| f.is_active).unwrap_or(false))
}

/// Toggle a flag, creating it if it does not exist.
pub async fn set_enabled(name: &str, active: bool) -> Result<(), DbErr> {
    let db = get_db_pool();

    match feature_flags::Entity::find_by_id(name.to_owned()).one(db).await? {
        Some(flag) => {
            let mut flag: feature_flags::ActiveModel = flag.into();
            flag.is_active = Set(active);
            flag.update(db).await?;
        }
        None => {
            feature_flags::ActiveModel {
                name: Set(name.to_owned()),
                is_active: Set(active),
            }
            .insert(db)
            .await?;
        }
    }

    log::info!("feature flag '{}' set to {}", name, active);
    Ok(())
}
