/// ハンドラーの応答
///
/// Lambdaプロキシ形式の `{"statusCode": 200, "body": "\"Success\""}` を表す。
/// `body` はメッセージ文字列をJSONシリアライズした値。
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Success";

/// ハンドラーの応答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// JSONシリアライズ済みの本文
    pub body: String,
}

impl UploadResponse {
    /// 成功応答を作成
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: Value::from(SUCCESS_MESSAGE).to_string(),
        }
    }
}
