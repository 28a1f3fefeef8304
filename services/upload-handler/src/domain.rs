// Domain layer modules
pub mod secret_arn;
pub mod upload_event;
pub mod upload_response;

// Re-exports
pub use secret_arn::{SecretArn, SecretArnError};
pub use upload_event::{UploadEvent, UploadedObject};
pub use upload_response::{SUCCESS_MESSAGE, UploadResponse};
