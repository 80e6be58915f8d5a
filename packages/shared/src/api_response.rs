//! # 成功レスポンス
//!
//! 更新・削除のように、レコードを返さない操作の応答 `{ "success": true }`。

use serde::{Deserialize, Serialize};

/// レコードを返さない操作の成功レスポンス
///
/// ```
/// use todos_shared::SuccessResponse;
///
/// let response = SuccessResponse::new();
/// assert!(response.success);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeを正しいjson形状にする() {
        let json = serde_json::to_value(SuccessResponse::new()).unwrap();

        assert_eq!(json, serde_json::json!({ "success": true }));
    }
}
