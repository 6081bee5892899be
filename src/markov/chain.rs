use super::History;
use crate::Arbitrary;
use crate::Count;
use crate::game::Throw;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Markov-style sequence model over opponent throws.
///
/// The last `order` throws form a state key; the table counts which throw
/// followed each key. Keys are created lazily by [`Chain::observe`] and
/// never by read-only lookups. Cold (fewer than `order` observations) the
/// model predicts uniformly at random; warm it predicts the modal
/// continuation of the current key, falling back to the modal throw of the
/// whole history for keys it has never seen.
pub struct Chain {
    order: usize,
    history: History,
    transitions: HashMap<Vec<Throw>, BTreeMap<Throw, Count>>,
}

impl Chain {
    pub fn new(order: usize, capacity: usize) -> Self {
        Self {
            order,
            history: History::new(capacity),
            transitions: HashMap::new(),
        }
    }

    /// Record an observed opponent throw.
    /// The state key is taken from history *before* the throw is appended,
    /// so the model never learns a transition into its own key.
    pub fn observe(&mut self, throw: Throw) {
        if let Some(key) = self.history.window(self.order) {
            *self
                .transitions
                .entry(key)
                .or_default()
                .entry(throw)
                .or_insert(0) += 1;
        }
        self.history.push(throw);
    }

    /// Predict the opponent's next throw. Pure; mutates nothing.
    pub fn predict(&self) -> Throw {
        match self.history.window(self.order) {
            None => Throw::random(),
            Some(key) => match self.transitions.get(&key) {
                Some(counts) if !counts.is_empty() => {
                    Self::argmax(counts.iter().map(|(t, n)| (*t, *n)))
                }
                _ => self.modal(),
            },
        }
    }

    /// Overall-frequency fallback for keys with no recorded continuation.
    fn modal(&self) -> Throw {
        if self.history.is_empty() {
            return Throw::random();
        }
        Self::argmax(
            Throw::all()
                .iter()
                .map(|t| (*t, self.history.frequency(*t))),
        )
    }

    /// First maximum in enumeration order wins ties.
    /// Deterministic because both callers enumerate Rock < Paper < Scissors.
    fn argmax(counts: impl Iterator<Item = (Throw, Count)>) -> Throw {
        counts
            .fold(None, |best, (throw, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((throw, n)),
            })
            .map(|(throw, _)| throw)
            .unwrap_or_else(Throw::random)
    }

    /// Throws observed so far, bounded by history capacity.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Distinct state keys learned so far.
    pub fn states(&self) -> usize {
        self.transitions.len()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Cold until `order` throws have been observed; irreversible per instance.
    pub fn is_cold(&self) -> bool {
        self.history.len() < self.order
    }
}
