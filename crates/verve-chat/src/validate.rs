// SPDX-FileCopyrightText: 2026 Verve Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response contract enforcement.

use verve_core::ChatError;

use crate::types::ResponsePayload;

/// Extracts the assistant text from a backend payload.
///
/// Fails with `InvalidFormat` when `choices` is missing/empty or the first
/// choice lacks textual content. On success the content string is returned
/// unmodified -- no trimming, no re-encoding -- so callers must not assume
/// any normalization.
pub fn extract_content(payload: ResponsePayload) -> Result<String, ChatError> {
    let Some(first) = payload.choices.into_iter().next() else {
        return Err(ChatError::InvalidFormat(
            "choices array is missing or empty".to_string(),
        ));
    };
    first
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| ChatError::InvalidFormat("first choice has no message content".to_string()))
}
