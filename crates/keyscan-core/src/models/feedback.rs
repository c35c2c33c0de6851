//! Correction submitted by the client after an analysis.
//!
//! Consumed by the sample-store collaborator, not by the decision pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::RESULT_COUNT;
use crate::errors::ContractError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackRequest {
    /// The `input_id` of the analysis being corrected.
    pub input_id: String,
    /// Identifier of the candidate the user picked.
    #[serde(default)]
    pub selected_id: Option<String>,
    /// Rank (1-3) of the candidate the user picked.
    #[serde(default)]
    pub chosen_rank: Option<i64>,
    /// True when none of the candidates was right.
    #[serde(default)]
    pub correction: bool,
    /// Manual values keyed by correctable field name.
    #[serde(default)]
    pub manual_data: Option<HashMap<String, String>>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl FeedbackRequest {
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            selected_id: None,
            chosen_rank: None,
            correction: false,
            manual_data: None,
            metadata: None,
        }
    }

    /// Construct-or-fail check applied before handing feedback to the store.
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.input_id.trim().is_empty() {
            return Err(ContractError::InvalidFeedback {
                reason: "input_id must not be empty".to_string(),
            });
        }
        if let Some(rank) = self.chosen_rank {
            if !(1..=RESULT_COUNT as i64).contains(&rank) {
                return Err(ContractError::InvalidFeedback {
                    reason: format!("chosen_rank {rank} outside 1..={RESULT_COUNT}"),
                });
            }
        }
        Ok(())
    }
}
