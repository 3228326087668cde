mod generator;
mod store;

pub use generator::{generate_assignment, AssignmentErr, Pair, Participant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::familywish_errors::FWErr;

/// Supplies the participants of a run.
#[async_trait::async_trait]
pub trait RosterStore: Send + Sync {
    async fn participants(&self) -> Result<Vec<Participant>, FWErr>;
}

/// Persists giver to receiver pairs.
#[async_trait::async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Deletes every stored pair and inserts `pairs` as one atomic step.
    async fn replace_all(&self, pairs: &[Pair]) -> Result<(), FWErr>;
    async fn receiver_for(&self, giver_id: i64) -> Result<Option<i64>, FWErr>;
    async fn pairs(&self) -> Result<Vec<Pair>, FWErr>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub n_pairs: usize,
    pub team_constraint_honored: bool,
}

pub async fn run_secret_santa<R, A, G>(
    roster: &R,
    assignments: &A,
    rng: &mut G,
) -> Result<RunOutcome, FWErr>
where
    R: RosterStore + ?Sized,
    A: AssignmentStore + ?Sized,
    G: Rng + Send + ?Sized,
{
    let participants = roster.participants().await?;
    debug!(
        target: "secret_santa",
        "Drawing for {}",
        participants.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
    );

    let assignment = match generate_assignment(&participants, rng) {
        Ok(assignment) => assignment,
        Err(err) => {
            warn!(target: "secret_santa", "No assignment for {} participants: {:?}", participants.len(), err);
            return Err(err.into());
        }
    };

    if !assignment.team_constraint_honored {
        warn!(
            target: "secret_santa",
            "Team constraint could not be satisfied, using a plain derangement"
        );
    }

    assignments.replace_all(&assignment.pairs).await?;
    info!(
        target: "secret_santa",
        "Stored {} pairs after {} draws", assignment.pairs.len(), assignment.attempts
    );

    Ok(RunOutcome {
        n_pairs: assignment.pairs.len(),
        team_constraint_honored: assignment.team_constraint_honored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::sync::Mutex;

    struct FixedRoster(Vec<Participant>);

    #[async_trait::async_trait]
    impl RosterStore for FixedRoster {
        async fn participants(&self) -> Result<Vec<Participant>, FWErr> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        pairs: Mutex<Vec<Pair>>,
        writes: Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl AssignmentStore for RecordingStore {
        async fn replace_all(&self, pairs: &[Pair]) -> Result<(), FWErr> {
            *self.pairs.lock().unwrap() = pairs.to_vec();
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }

        async fn receiver_for(&self, giver_id: i64) -> Result<Option<i64>, FWErr> {
            Ok(self
                .pairs
                .lock()
                .unwrap()
                .iter()
                .find(|pair| pair.giver == giver_id)
                .map(|pair| pair.receiver))
        }

        async fn pairs(&self) -> Result<Vec<Pair>, FWErr> {
            Ok(self.pairs.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn degenerate_roster_writes_nothing() {
        let roster = FixedRoster(vec![Participant::new(1, "Anna", None)]);
        let store = RecordingStore::default();
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        let result = run_secret_santa(&roster, &store, &mut rng).await;
        assert!(matches!(
            result,
            Err(FWErr::AssignmentError(AssignmentErr::DegenerateInput))
        ));
        assert_eq!(*store.writes.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn successful_run_stores_every_giver() {
        let roster = FixedRoster(vec![
            Participant::new(1, "Anna", Some("A")),
            Participant::new(2, "Ben", Some("A")),
            Participant::new(3, "Clara", None),
            Participant::new(4, "David", Some("B")),
        ]);
        let store = RecordingStore::default();
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        let outcome = run_secret_santa(&roster, &store, &mut rng).await.unwrap();
        assert_eq!(outcome.n_pairs, 4);
        assert!(outcome.team_constraint_honored);
        assert_eq!(*store.writes.lock().unwrap(), 1);
        for giver in 1..=4 {
            let receiver = store.receiver_for(giver).await.unwrap().unwrap();
            assert_ne!(giver, receiver);
        }
    }
}
