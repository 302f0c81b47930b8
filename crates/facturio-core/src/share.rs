//! # Share Payload Codec
//!
//! A document can be shared as a self-contained link: the document and
//! the issuing company's profile, JSON-encoded then base64-encoded, so
//! the receiving browser can render a read-only view with no backend.
//!
//! The standard base64 alphabet matches what the web build produces
//! with `btoa`; payloads are interchangeable in both directions. URL
//! embedding (query-string escaping) is the caller's concern.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{CompanyProfile, Document};

/// Everything a read-only share view needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    #[serde(rename = "doc")]
    pub document: Document,
    pub profile: CompanyProfile,
}

impl SharePayload {
    pub fn new(document: Document, profile: CompanyProfile) -> Self {
        SharePayload { document, profile }
    }

    /// Encodes the payload as base64-wrapped JSON.
    pub fn encode(&self) -> String {
        // Serialization of these types cannot fail: no non-string map
        // keys, no non-finite floats anywhere in the model.
        let json = serde_json::to_vec(self).expect("share payload serializes");
        STANDARD.encode(json)
    }

    /// Decodes a payload produced by [`SharePayload::encode`] (or the
    /// web build's equivalent).
    ///
    /// ## Errors
    /// - [`CoreError::ShareEncoding`] when the input is not base64
    /// - [`CoreError::SharePayload`] when the decoded bytes are not a
    ///   document bundle
    pub fn decode(encoded: &str) -> CoreResult<SharePayload> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CoreError::ShareEncoding(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| CoreError::SharePayload(e.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
