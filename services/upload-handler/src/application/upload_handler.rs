/// アップロード通知ハンドラー
///
/// S3へのファイルアップロード通知を受けてLambdaが呼び出された際の処理を実行する。
/// 1回の呼び出しで出力するログは2行のみ:
/// 1. 固定メッセージ `File uploaded`
/// 2. 設定されたシークレット参照ARN（未設定時は `(not set)`）
use tracing::info;

use crate::domain::{SecretArn, UploadEvent, UploadResponse};
use crate::infrastructure::HandlerConfig;

/// アップロード通知のログメッセージ
pub const UPLOAD_MESSAGE: &str = "File uploaded";

/// シークレット参照ARNが未設定の場合の表示
pub const MISSING_ARN_MARKER: &str = "(not set)";

/// アップロード通知を処理するハンドラー
///
/// 設定はコールドスタート時に一度だけ構築して渡す。
/// ハンドラー自身は状態を持たず、呼び出し間で何も蓄積しない。
#[derive(Debug, Clone)]
pub struct UploadHandler {
    config: HandlerConfig,
}

impl UploadHandler {
    /// 新しいUploadHandlerを作成
    pub fn new(config: HandlerConfig) -> Self {
        Self { config }
    }

    /// アップロード通知を処理
    ///
    /// イベントの内容・シークレット参照の有無にかかわらず常に成功応答を返す。
    /// シークレットの値は取得しない（参照先ARNのログ出力のみ）。
    pub fn handle(&self, event: &UploadEvent) -> UploadResponse {
        info!(
            record_count = event.record_count(),
            objects = %event.object_locations(),
            "{}",
            UPLOAD_MESSAGE
        );

        match self.config.secrets_manager_arn() {
            Some(raw) => match SecretArn::parse(raw) {
                Ok(arn) => info!(
                    secret_arn_present = true,
                    partition = arn.partition(),
                    region = arn.region(),
                    account_id = arn.account_id(),
                    secret_name = arn.secret_name(),
                    "Secret ARN: {}",
                    raw
                ),
                Err(err) => info!(
                    secret_arn_present = true,
                    arn_parse_error = %err,
                    "Secret ARN: {}",
                    raw
                ),
            },
            None => info!(
                secret_arn_present = false,
                secret_arn_blank = self.config.is_secrets_manager_arn_blank(),
                "Secret ARN: {}",
                MISSING_ARN_MARKER
            ),
        }

        UploadResponse::success()
    }
}
