// アプリケーション層モジュール
pub mod upload_handler;

// 再エクスポート
pub use upload_handler::{MISSING_ARN_MARKER, UPLOAD_MESSAGE, UploadHandler};
