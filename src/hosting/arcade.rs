use crate::game::Outcome;
use crate::game::Throw;
use crate::players::Robo;
use tokio::sync::RwLock;

/// Everything the transport layer reports about one completed round.
pub struct Round {
    pub user: Throw,
    pub robo: Throw,
    pub predicted: Throw,
    pub result: Outcome,
    pub history_len: usize,
    pub learned_states: usize,
}

/// Shared model state behind the HTTP handlers.
///
/// One global player for the whole process. A round is a single
/// write-lock critical section: choose, score, observe, snapshot. The
/// choice is computed before the observation lands, so the model never
/// sees the throw it is being asked to beat.
pub struct Arcade {
    robo: RwLock<Robo>,
    order: usize,
    capacity: usize,
}

impl Arcade {
    pub fn new(order: usize, capacity: usize) -> Self {
        Self {
            robo: RwLock::new(Robo::new(order, capacity)),
            order,
            capacity,
        }
    }

    /// Play one round against the house.
    pub async fn play(&self, user: Throw) -> Round {
        let mut robo = self.robo.write().await;
        let (selected, predicted) = robo.choose();
        let result = Outcome::from((user, selected));
        robo.observe(user);
        log::debug!(
            "round: user {} vs robo {} ({}), predicted {}",
            user,
            selected,
            result,
            predicted
        );
        Round {
            user,
            robo: selected,
            predicted,
            result,
            history_len: robo.chain().len(),
            learned_states: robo.chain().states(),
        }
    }

    /// Replace the model with a fresh cold instance of the same shape.
    /// Whole-instance replacement: in-flight readers see old or new, never
    /// a half-cleared model.
    pub async fn reset(&self) {
        *self.robo.write().await = Robo::new(self.order, self.capacity);
        log::info!("model reset");
    }

    /// Introspection counters without playing a round.
    pub async fn snapshot(&self) -> (usize, usize) {
        let robo = self.robo.read().await;
        (robo.chain().len(), robo.chain().states())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rounds_are_scored_before_learning() {
        let arcade = Arcade::new(3, 50);
        // first round is played against an empty history
        let round = arcade.play(Throw::Rock).await;
        assert!(round.history_len == 1);
        assert!(round.learned_states == 0);
        assert!(round.robo.beats(&round.predicted));
    }

    #[tokio::test]
    async fn counters_accumulate_across_rounds() {
        let arcade = Arcade::new(3, 50);
        for _ in 0..4 {
            arcade.play(Throw::Paper).await;
        }
        let (history_len, learned_states) = arcade.snapshot().await;
        assert!(history_len == 4);
        assert!(learned_states == 1);
    }

    #[tokio::test]
    async fn reset_discards_the_model() {
        let arcade = Arcade::new(3, 50);
        for _ in 0..8 {
            arcade.play(Throw::Scissors).await;
        }
        arcade.reset().await;
        let (history_len, learned_states) = arcade.snapshot().await;
        assert!(history_len == 0);
        assert!(learned_states == 0);
    }

    #[tokio::test]
    async fn outcome_is_from_the_callers_perspective() {
        let arcade = Arcade::new(3, 50);
        let round = arcade.play(Throw::Rock).await;
        assert!(round.result == Outcome::from((round.user, round.robo)));
    }
}
