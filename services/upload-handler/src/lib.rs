use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::application::UploadHandler;
use crate::domain::{UploadEvent, UploadResponse};

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

/// Lambdaイベントをアップロード通知として処理する
///
/// ペイロードは任意のJSONを受け付け、Contextは使用しない。
pub async fn function_handler(
    handler: &UploadHandler,
    event: LambdaEvent<Value>,
) -> Result<UploadResponse, Error> {
    let (payload, _context) = event.into_parts();
    let upload_event = UploadEvent::from_payload(payload);
    Ok(handler.handle(&upload_event))
}
