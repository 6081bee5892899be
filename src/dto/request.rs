use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct PlayRound {
    pub user_move: String,
}
