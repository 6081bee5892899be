use crate::hosting::Round;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiModel {
    pub history_len: usize,
    pub learned_states: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiRound {
    pub user_move: String,
    pub ai_move: String,
    pub result: String,
    pub predicted_next_user_move: String,
    pub model_info: ApiModel,
}

impl From<Round> for ApiRound {
    fn from(round: Round) -> Self {
        Self {
            user_move: round.user.to_string(),
            ai_move: round.robo.to_string(),
            result: round.result.to_string(),
            predicted_next_user_move: round.predicted.to_string(),
            model_info: ApiModel {
                history_len: round.history_len,
                learned_states: round.learned_states,
            },
        }
    }
}
