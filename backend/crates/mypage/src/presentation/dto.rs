//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile
// ============================================================================

/// Profile update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInfoRequest {
    pub member_nickname: String,
    pub member_tel: String,
    /// Postcode, road address, detail address
    #[serde(default)]
    pub member_address: [String; 3],
}

// ============================================================================
// Password
// ============================================================================

/// Change password request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePwRequest {
    pub current_pw: String,
    pub new_pw: String,
}

/// Secession request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecessionRequest {
    pub member_pw: String,
}

// ============================================================================
// Results
// ============================================================================

/// Affected-row count plus a message for the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyPageResultResponse {
    /// Rows changed; `0` means the request was rejected or matched nothing
    pub result: u64,
    pub message: String,
}

impl MyPageResultResponse {
    pub fn new(result: u64, success: &str, failure: &str) -> Self {
        let message = if result > 0 { success } else { failure };
        Self {
            result,
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Upload
// ============================================================================

/// Upload response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Public path of the stored file, `null` when nothing was uploaded
    pub path: Option<String>,
}
