use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::{AssignmentStore, Pair, Participant, RosterStore};
use crate::familywish_errors::FWErr;
use crate::orm::model::{member, secret_santa};

#[async_trait::async_trait]
impl RosterStore for DatabaseConnection {
    async fn participants(&self) -> Result<Vec<Participant>, FWErr> {
        let db_members = member::Entity::find()
            .order_by_asc(member::Column::Name)
            .all(self)
            .await?;
        Ok(db_members
            .iter()
            .map(|m| Participant::new(m.id, &m.name, m.team_name.as_deref()))
            .collect())
    }
}

#[async_trait::async_trait]
impl AssignmentStore for DatabaseConnection {
    async fn replace_all(&self, pairs: &[Pair]) -> Result<(), FWErr> {
        let txn = self.begin().await?;

        secret_santa::Entity::delete_many().exec(&txn).await?;
        if !pairs.is_empty() {
            let rows = pairs.iter().map(|pair| secret_santa::ActiveModel {
                giver_id: Set(pair.giver),
                receiver_id: Set(pair.receiver),
            });
            secret_santa::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn receiver_for(&self, giver_id: i64) -> Result<Option<i64>, FWErr> {
        let db_pair = secret_santa::Entity::find_by_id(giver_id).one(self).await?;
        Ok(db_pair.map(|pair| pair.receiver_id))
    }

    async fn pairs(&self) -> Result<Vec<Pair>, FWErr> {
        let db_pairs = secret_santa::Entity::find().all(self).await?;
        Ok(db_pairs
            .iter()
            .map(|pair| Pair {
                giver: pair.giver_id,
                receiver: pair.receiver_id,
            })
            .collect())
    }
}
