use crate::game::Throw;
use crate::markov::Chain;

/// The house player. Predicts the opponent's next throw from the chain
/// and plays the counter to that prediction, one ply deep.
pub struct Robo {
    chain: Chain,
}

impl Robo {
    pub fn new(order: usize, capacity: usize) -> Self {
        Self {
            chain: Chain::new(order, capacity),
        }
    }

    /// (our throw, their predicted throw). Reads the chain, never writes it,
    /// so a choice is always computed from history prior to this round.
    pub fn choose(&self) -> (Throw, Throw) {
        let predicted = self.chain.predict();
        (predicted.counter(), predicted)
    }

    /// Feed the opponent's revealed throw back into the model.
    pub fn observe(&mut self, throw: Throw) {
        self.chain.observe(throw);
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }
}
