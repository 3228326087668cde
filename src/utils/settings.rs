use crate::familywish_errors::FWErr;
use crate::orm::model::setting;
use crate::orm::WISH_DEADLINE_KEY;
use crate::utils::data_validation::deadline::wishes_locked_on;
use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::DatabaseConnection;

pub async fn get_setting(key: &str, db: &DatabaseConnection) -> Result<Option<String>, FWErr> {
    let entry = setting::Entity::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await?;
    Ok(entry.map(|entry| entry.value))
}

// Insert or replace
pub async fn set_setting(key: &str, value: &str, db: &DatabaseConnection) -> Result<(), FWErr> {
    match setting::Entity::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await?
    {
        Some(entry) => {
            let mut entry = entry.into_active_model();
            entry.value = Set(value.to_string());
            entry.update(db).await?;
        }
        None => {
            let entry = setting::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                ..Default::default()
            };
            entry.insert(db).await?;
        }
    }
    Ok(())
}

/// The configured deadline, `None` when unset or cleared.
pub async fn get_wish_deadline(db: &DatabaseConnection) -> Result<Option<String>, FWErr> {
    Ok(get_setting(WISH_DEADLINE_KEY, db)
        .await?
        .filter(|deadline| !deadline.is_empty()))
}

pub async fn wishes_locked(db: &DatabaseConnection) -> Result<bool, FWErr> {
    let deadline = get_wish_deadline(db).await?;
    let today = chrono::Local::now().date_naive();
    Ok(wishes_locked_on(deadline.as_deref(), today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sharedstate::testing::test_state;

    #[tokio::test]
    async fn set_replaces_existing_value() {
        let sstate = test_state().await;
        let db = &*sstate.database;

        assert_eq!(get_wish_deadline(db).await.unwrap(), None);
        set_setting(WISH_DEADLINE_KEY, "2026-12-20", db).await.unwrap();
        set_setting(WISH_DEADLINE_KEY, "2026-12-22", db).await.unwrap();
        assert_eq!(
            get_wish_deadline(db).await.unwrap(),
            Some("2026-12-22".to_string())
        );
        assert_eq!(setting::Entity::find().count(db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn past_deadline_locks_wishes() {
        let sstate = test_state().await;
        let db = &*sstate.database;

        assert!(!wishes_locked(db).await.unwrap());
        set_setting(WISH_DEADLINE_KEY, "2000-01-01", db).await.unwrap();
        assert!(wishes_locked(db).await.unwrap());
        set_setting(WISH_DEADLINE_KEY, "", db).await.unwrap();
        assert!(!wishes_locked(db).await.unwrap());
        assert_eq!(get_setting("unknown", db).await.unwrap(), None);
    }
}
