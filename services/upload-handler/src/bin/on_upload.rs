/// アップロード通知Lambdaエントリポイント
///
/// S3イベント通知でトリガーされ、アップロード通知とシークレット参照ARNを
/// ログ出力して `{"statusCode": 200, "body": "\"Success\""}` を返す。
use lambda_runtime::{Error, service_fn};
use tracing::info;
use upload_handler::application::UploadHandler;
use upload_handler::function_handler;
use upload_handler::infrastructure::{HandlerConfig, init_logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 設定はコールドスタート時に一度だけ読み込む
    let config = HandlerConfig::from_env();
    info!(
        secret_arn_configured = config.secrets_manager_arn().is_some(),
        "アップロード通知Lambda関数を初期化"
    );
    let handler = UploadHandler::new(config);

    lambda_runtime::run(service_fn(|event| function_handler(&handler, event))).await
}
