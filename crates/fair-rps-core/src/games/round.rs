//! Single-round engine: commit, accept the user's move, reveal.

use super::moves::MoveSet;
use crate::config::EngineConfig;
use crate::crypto::{Committer, HmacCommitter};
use crate::error::GameError;
use crate::protocol::{Outcome, RoundReceipt, RoundState};
use rand::Rng;
use tracing::debug;

/// One round against the system.
///
/// The system's move is drawn and committed to during [`Round::setup`]; the
/// commitment key only becomes readable once the user has moved.
pub struct Round<C: Committer = HmacCommitter> {
    committer: C,
    moves: Option<MoveSet>,
    hidden: usize,
    user_move: Option<usize>,
    state: RoundState,
}

impl Round<HmacCommitter> {
    /// Create a round backed by a real HMAC committer
    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(HmacCommitter::new(config.algorithm))
    }
}

impl Default for Round<HmacCommitter> {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl<C: Committer> Round<C> {
    pub fn new(committer: C) -> Self {
        Self {
            committer,
            moves: None,
            hidden: 0,
            user_move: None,
            state: RoundState::Unset,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn committer(&self) -> &C {
        &self.committer
    }

    /// Number of moves, 0 before setup
    pub fn move_count(&self) -> usize {
        self.moves.as_ref().map_or(0, MoveSet::len)
    }

    /// Validate the move list, pick and commit to the system's move.
    ///
    /// On error nothing is stored and the round stays [`RoundState::Unset`].
    pub fn setup<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), GameError> {
        self.expect_state(RoundState::Unset)?;

        let moves = MoveSet::new(names)?;
        let hidden = rand::thread_rng().gen_range(0..moves.len());
        let name = moves.get(hidden).unwrap_or_default();
        let digest = self.committer.commit(name);

        debug!(
            moves = moves.len(),
            algorithm = %self.committer.algorithm(),
            digest = %digest,
            "round started"
        );

        self.moves = Some(moves);
        self.hidden = hidden;
        self.state = RoundState::InProgress;
        Ok(())
    }

    /// Copy of the move names, empty before setup
    pub fn moves(&self) -> Vec<String> {
        self.moves
            .as_ref()
            .map(|m| m.names().to_vec())
            .unwrap_or_default()
    }

    /// Digest while the round is running, the system's move once it is over
    pub fn pending_display(&self) -> String {
        match self.state {
            RoundState::Unset => String::new(),
            RoundState::InProgress => self.committer.digest(),
            RoundState::Finished => self.hidden_name().to_string(),
        }
    }

    /// Commitment key, only after the round is finished
    pub fn revealed_key(&self) -> Option<String> {
        match self.state {
            RoundState::Finished => Some(self.committer.key()),
            _ => None,
        }
    }

    /// Play the user's move and finish the round
    pub fn submit_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.expect_state(RoundState::InProgress)?;

        let outcome = self.resolve(index, self.hidden)?;
        self.user_move = Some(index);
        self.state = RoundState::Finished;

        debug!(
            user_move = index,
            system_move = self.hidden,
            outcome = %outcome,
            "round finished"
        );
        Ok(outcome)
    }

    /// Outcome of move `a` against move `b` under the current move list
    pub fn resolve(&self, a: usize, b: usize) -> Result<Outcome, GameError> {
        match &self.moves {
            Some(moves) => moves.resolve(a, b),
            None => Err(GameError::MoveOutOfRange { index: a, count: 0 }),
        }
    }

    /// Outcomes for every pairing: row is the user's move, column the system's
    pub fn outcome_table(&self) -> Vec<Vec<Outcome>> {
        let n = self.move_count();
        (0..n)
            .map(|a| (0..n).map(|b| super::rps::resolve(a, b, n)).collect())
            .collect()
    }

    /// Proof material for a finished round
    pub fn receipt(&self) -> Option<RoundReceipt> {
        let moves = self.moves.as_ref()?;
        let user_move = self.user_move?;
        let key = self.revealed_key()?;

        Some(RoundReceipt {
            moves: moves.names().to_vec(),
            user_move: moves.get(user_move)?.to_string(),
            system_move: self.hidden_name().to_string(),
            outcome: super::rps::resolve(user_move, self.hidden, moves.len()),
            algorithm: self.committer.algorithm(),
            digest: self.committer.digest(),
            key,
        })
    }

    fn hidden_name(&self) -> &str {
        self.moves
            .as_ref()
            .and_then(|m| m.get(self.hidden))
            .unwrap_or_default()
    }

    fn expect_state(&self, expected: RoundState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::WrongState {
                expected,
                actual: self.state,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{verify_commitment, FixedCommitter};
    use crate::error::SetupError;

    const RPS: [&str; 3] = ["Rock", "Paper", "Scissors"];

    fn started() -> Round<FixedCommitter> {
        let mut round = Round::new(FixedCommitter::default());
        round.setup(&RPS).unwrap();
        round
    }

    fn hidden_index(round: &Round<FixedCommitter>) -> usize {
        let name = round.committer().committed_message().unwrap();
        RPS.iter().position(|m| *m == name).unwrap()
    }

    #[test]
    fn test_unset_round() {
        let round = Round::new(FixedCommitter::default());
        assert_eq!(round.state(), RoundState::Unset);
        assert!(round.moves().is_empty());
        assert_eq!(round.pending_display(), "");
        assert_eq!(round.revealed_key(), None);
        assert!(round.outcome_table().is_empty());
    }

    #[test]
    fn test_setup_commits_once() {
        let round = started();
        assert_eq!(round.state(), RoundState::InProgress);
        assert_eq!(round.committer().commit_count(), 1);
        assert_eq!(round.pending_display(), round.committer().digest());
        assert_eq!(round.revealed_key(), None);
    }

    #[test]
    fn test_setup_rejection_leaves_unset() {
        let mut round = Round::new(FixedCommitter::default());
        let err = round.setup(&["a", "a", "b"]).unwrap_err();

        assert_eq!(err, GameError::Setup(SetupError::DuplicateMove("a".into())));
        assert_eq!(round.state(), RoundState::Unset);
        assert!(round.moves().is_empty());
        assert_eq!(round.committer().commit_count(), 0);

        round.setup(&RPS).unwrap();
        assert_eq!(round.state(), RoundState::InProgress);
    }

    #[test]
    fn test_setup_twice_rejected() {
        let mut round = started();
        assert_eq!(
            round.setup(&RPS),
            Err(GameError::WrongState {
                expected: RoundState::Unset,
                actual: RoundState::InProgress,
            })
        );
        assert_eq!(round.committer().commit_count(), 1);
    }

    #[test]
    fn test_moves_is_a_copy() {
        let round = started();
        let mut moves = round.moves();
        moves[0] = "Lizard".into();
        assert_eq!(round.moves(), RPS);
    }

    #[test]
    fn test_submit_finishes_and_reveals() {
        let mut round = started();
        let hidden = hidden_index(&round);

        let outcome = round.submit_move(hidden).unwrap();

        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(round.state(), RoundState::Finished);
        assert_eq!(round.pending_display(), RPS[hidden]);
        assert_eq!(round.revealed_key(), Some(round.committer().key()));
    }

    #[test]
    fn test_submit_uses_circular_rule() {
        for user in 0..RPS.len() {
            let mut round = started();
            let hidden = hidden_index(&round);
            let outcome = round.submit_move(user).unwrap();
            assert_eq!(outcome, crate::games::resolve(user, hidden, RPS.len()));
        }
    }

    #[test]
    fn test_submit_out_of_range() {
        let mut round = started();
        assert_eq!(
            round.submit_move(3),
            Err(GameError::MoveOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(round.state(), RoundState::InProgress);
        assert_eq!(round.revealed_key(), None);
    }

    #[test]
    fn test_submit_before_setup_or_twice() {
        let mut round = Round::new(FixedCommitter::default());
        assert!(matches!(
            round.submit_move(0),
            Err(GameError::WrongState { .. })
        ));

        let mut round = started();
        round.submit_move(0).unwrap();
        assert_eq!(
            round.submit_move(0),
            Err(GameError::WrongState {
                expected: RoundState::InProgress,
                actual: RoundState::Finished,
            })
        );
    }

    #[test]
    fn test_resolve_any_state() {
        let round = Round::new(FixedCommitter::default());
        assert_eq!(
            round.resolve(0, 0),
            Err(GameError::MoveOutOfRange { index: 0, count: 0 })
        );

        let round = started();
        assert_eq!(round.resolve(2, 0), Ok(Outcome::Win));
        assert!(round.resolve(0, 5).is_err());
    }

    #[test]
    fn test_outcome_table() {
        let round = started();
        let table = round.outcome_table();

        assert_eq!(table.len(), 3);
        for (a, row) in table.iter().enumerate() {
            assert_eq!(row[a], Outcome::Draw);
            for (b, outcome) in row.iter().enumerate() {
                assert_eq!(*outcome, table[b][a].reversed());
            }
        }
    }

    #[test]
    fn test_receipt_only_when_finished() {
        let mut round = started();
        assert!(round.receipt().is_none());

        let outcome = round.submit_move(1).unwrap();
        let receipt = round.receipt().unwrap();

        assert_eq!(receipt.user_move, "Paper");
        assert_eq!(receipt.outcome, outcome);
        assert_eq!(receipt.system_move, round.pending_display());
        assert_eq!(receipt.verify(), Ok(true));
    }

    #[test]
    fn test_real_committer_round_trip() {
        let mut round: Round = Round::default();
        round.setup(&["a", "b", "c", "d", "e"]).unwrap();
        let digest = round.pending_display();

        round.submit_move(0).unwrap();
        let key = round.revealed_key().unwrap();

        assert_eq!(key.len(), 64);
        assert_eq!(
            verify_commitment(
                EngineConfig::default().algorithm,
                &round.pending_display(),
                &key,
                &digest
            ),
            Ok(true)
        );
    }
}
