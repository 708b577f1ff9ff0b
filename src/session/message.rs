//! Typed messages exchanged with the settings panel

use serde::{Deserialize, Serialize};

use crate::io::error::Result;
use crate::layout::GenerationParameters;
use crate::sampling::ActivationMask;

/// Request sent by the settings panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Sample a fresh mask and send it back for preview
    #[serde(rename = "preview-grid")]
    Preview {
        /// Parameters for sampling
        options: GenerationParameters,
    },
    /// Lay out the current mask and insert it into the canvas
    #[serde(rename = "insert-grid")]
    Confirm {
        /// Parameters for layout
        options: GenerationParameters,
    },
}

impl Request {
    /// Parameters carried by the request
    pub const fn options(&self) -> &GenerationParameters {
        match self {
            Self::Preview { options } | Self::Confirm { options } => options,
        }
    }

    /// Wire name of the request
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Preview { .. } => "preview-grid",
            Self::Confirm { .. } => "insert-grid",
        }
    }

    /// Decode a request from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a known request, or if an embedded
    /// parameter has the wrong type
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Response posted back to the settings panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Freshly sampled mask, unmodified
    #[serde(rename = "preview-data")]
    PreviewData {
        /// Mask as nested rows
        data: ActivationMask,
    },
    /// Acknowledges a successful insert
    #[serde(rename = "grid-inserted")]
    GridInserted,
}

impl Response {
    /// Encode the response as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
