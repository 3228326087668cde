use rand::seq::SliceRandom;
use rand::Rng;

/// Draws that must also satisfy the team constraint before it is dropped.
pub const SOFT_CONSTRAINT_ATTEMPTS: usize = 200;
/// Total draws before the generator gives up.
pub const HARD_CONSTRAINT_ATTEMPTS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentErr {
    DegenerateInput,
    InfeasibleAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub team: Option<String>,
}

impl Participant {
    pub fn new(id: i64, name: &str, team: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            team: team
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        }
    }

    fn shares_team_with(&self, other: &Participant) -> bool {
        match (&self.team, &other.team) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub giver: i64,
    pub receiver: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub pairs: Vec<Pair>,
    pub team_constraint_honored: bool,
    pub attempts: usize,
}

fn has_self_pair(givers: &[Participant], receivers: &[Participant]) -> bool {
    givers
        .iter()
        .zip(receivers)
        .any(|(giver, receiver)| giver.id == receiver.id)
}

fn is_team_disjoint(givers: &[Participant], receivers: &[Participant]) -> bool {
    givers
        .iter()
        .zip(receivers)
        .all(|(giver, receiver)| !giver.shares_team_with(receiver))
}

fn to_pairs(givers: &[Participant], receivers: &[Participant]) -> Vec<Pair> {
    givers
        .iter()
        .zip(receivers)
        .map(|(giver, receiver)| Pair {
            giver: giver.id,
            receiver: receiver.id,
        })
        .collect()
}

/// Pairs every participant with a receiver other than themselves.
///
/// Givers keep the input order; each attempt shuffles a copy of the list as
/// the receivers. Within the first [`SOFT_CONSTRAINT_ATTEMPTS`] draws only a
/// team-disjoint draw is accepted. After that the first draw without a self
/// pair wins, preferring one already seen during the soft phase. The
/// team constraint is relaxed for everyone at once, never per pair.
pub fn generate_assignment<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
) -> Result<Assignment, AssignmentErr> {
    if participants.len() < 2 {
        return Err(AssignmentErr::DegenerateInput);
    }

    let mut receivers = participants.to_vec();
    let mut fallback: Option<Vec<Pair>> = None;

    for attempt in 1..=HARD_CONSTRAINT_ATTEMPTS {
        if attempt > SOFT_CONSTRAINT_ATTEMPTS {
            if let Some(pairs) = fallback.take() {
                return Ok(Assignment {
                    pairs,
                    team_constraint_honored: false,
                    attempts: attempt - 1,
                });
            }
        }

        receivers.shuffle(rng);
        if has_self_pair(participants, &receivers) {
            continue;
        }

        if attempt <= SOFT_CONSTRAINT_ATTEMPTS {
            if is_team_disjoint(participants, &receivers) {
                return Ok(Assignment {
                    pairs: to_pairs(participants, &receivers),
                    team_constraint_honored: true,
                    attempts: attempt,
                });
            }
            if fallback.is_none() {
                fallback = Some(to_pairs(participants, &receivers));
            }
            continue;
        }

        return Ok(Assignment {
            pairs: to_pairs(participants, &receivers),
            team_constraint_honored: false,
            attempts: attempt,
        });
    }

    Err(AssignmentErr::InfeasibleAssignment)
}
