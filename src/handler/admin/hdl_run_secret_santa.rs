use axum::extract::State;
use axum::Json;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::familywish_errors::FWErr;
use crate::secret_santa;
use crate::sharedstate::SharedState;
use crate::utils::auth::admin::AdminSession;

#[derive(Debug, Serialize)]
pub struct RunSecretSantaResponse {
    pub message: String,
    pub n_pairs: usize,
    pub team_constraint_honored: bool,
}

pub async fn run_secret_santa(
    State(sstate): State<Arc<SharedState>>,
    admin: AdminSession,
) -> Result<Json<RunSecretSantaResponse>, FWErr> {
    info!(target: "secret_santa", "Admin {} started a Secret Santa run", admin.username);

    // Fresh random source per run
    let mut rng = ChaCha20Rng::from_entropy();
    let db = &*sstate.database;
    let outcome = secret_santa::run_secret_santa(db, db, &mut rng).await?;

    let message = if outcome.team_constraint_honored {
        "Secret Santa assignments created successfully!".to_string()
    } else {
        "Secret Santa assignments created, but some givers share a team with their receiver."
            .to_string()
    };

    Ok(Json(RunSecretSantaResponse {
        message,
        n_pairs: outcome.n_pairs,
        team_constraint_honored: outcome.team_constraint_honored,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::testing::add_member;
    use crate::secret_santa::{AssignmentErr, AssignmentStore, Pair};
    use crate::sharedstate::testing::test_state;

    fn admin() -> AdminSession {
        AdminSession {
            username: "admin".to_string(),
        }
    }

    #[tokio::test]
    async fn single_member_keeps_old_assignment() {
        let sstate = test_state().await;
        add_member(&sstate.database, "Solo", None).await;
        let old_pairs = [Pair { giver: 10, receiver: 11 }, Pair { giver: 11, receiver: 10 }];
        sstate.database.replace_all(&old_pairs).await.unwrap();

        let result = run_secret_santa(State(sstate.clone()), admin()).await;
        assert!(matches!(
            result,
            Err(FWErr::AssignmentError(AssignmentErr::DegenerateInput))
        ));
        assert_eq!(sstate.database.pairs().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn same_team_trio_still_gets_pairs() {
        let sstate = test_state().await;
        for name in ["Opa", "Oma", "Tante"] {
            add_member(&sstate.database, name, Some("Schmidt")).await;
        }

        let Json(response) = run_secret_santa(State(sstate.clone()), admin()).await.unwrap();
        assert_eq!(response.n_pairs, 3);
        assert!(!response.team_constraint_honored);

        let pairs = sstate.database.pairs().await.unwrap();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.iter().all(|p| p.giver != p.receiver));
    }
}
