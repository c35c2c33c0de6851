use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Confidence, RawCandidate};
use crate::constants::{PLACEHOLDER_EXPLAIN_TEXT, PLACEHOLDER_TYPE, RESULT_COUNT};
use crate::errors::ContractError;

/// Crop of the key inside the input image, in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CropBBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A ranked, normalized candidate as it appears in the outbound contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Candidate {
    /// Position in the result list, 1-based.
    pub rank: u8,
    pub id_model_ref: Option<String>,
    #[serde(rename = "type")]
    pub key_type: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub orientation: Option<String>,
    pub head_color: Option<String>,
    pub visual_state: Option<String>,
    pub patentada: bool,
    pub compatibility_tags: Vec<String>,
    pub confidence: Confidence,
    pub explain_text: String,
    pub crop_bbox: Option<CropBBox>,
}

impl Candidate {
    /// Normalize a raw candidate into the given rank.
    ///
    /// Absent fields take the filler defaults, the confidence is clamped,
    /// and absent tags become an empty list. Fails only for a rank outside
    /// 1..=3.
    pub fn from_raw(rank: usize, raw: RawCandidate) -> Result<Self, ContractError> {
        let rank = Self::checked_rank(rank)?;
        let confidence = Confidence::new(raw.raw_confidence());
        Ok(Self {
            rank,
            id_model_ref: raw.id_model_ref,
            key_type: raw.key_type.unwrap_or_else(|| PLACEHOLDER_TYPE.to_string()),
            brand: raw.brand,
            model: raw.model,
            orientation: raw.orientation,
            head_color: raw.head_color,
            visual_state: raw.visual_state,
            patentada: raw.patentada.unwrap_or(false),
            compatibility_tags: raw.compatibility_tags.unwrap_or_default(),
            confidence,
            explain_text: raw
                .explain_text
                .unwrap_or_else(|| PLACEHOLDER_EXPLAIN_TEXT.to_string()),
            crop_bbox: raw.crop_bbox,
        })
    }

    /// Synthetic filler used when the engine returns fewer than three
    /// candidates.
    pub fn placeholder(rank: usize) -> Result<Self, ContractError> {
        Self::from_raw(rank, RawCandidate::default())
    }

    /// Whether this is an unfilled slot (no brand, model, or reference and
    /// zero confidence).
    pub fn is_placeholder(&self) -> bool {
        self.id_model_ref.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.confidence == Confidence::ZERO
            && self.key_type == PLACEHOLDER_TYPE
    }

    fn checked_rank(rank: usize) -> Result<u8, ContractError> {
        if (1..=RESULT_COUNT).contains(&rank) {
            // RESULT_COUNT fits in u8.
            Ok(rank as u8)
        } else {
            Err(ContractError::InvalidRank {
                rank: i64::try_from(rank).unwrap_or(i64::MAX),
            })
        }
    }
}
