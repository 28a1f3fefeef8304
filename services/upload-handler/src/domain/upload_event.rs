/// アップロード通知イベント
///
/// トリガー元（S3イベント通知）のペイロードを表す入力型。
/// ハンドラーはペイロードの内容に依存しないため、S3形式に一致しない
/// ペイロードもレコード0件の通知として受け付ける。
use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use serde_json::Value;

/// アップロードされたオブジェクトの概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    /// バケット名
    pub bucket: Option<String>,
    /// オブジェクトキー（URLエンコードされたまま）
    pub key: Option<String>,
}

impl std::fmt::Display for UploadedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "s3://{}/{}",
            self.bucket.as_deref().unwrap_or("-"),
            self.key.as_deref().unwrap_or("-")
        )
    }
}

impl From<&S3EventRecord> for UploadedObject {
    fn from(record: &S3EventRecord) -> Self {
        Self {
            bucket: record.s3.bucket.name.clone(),
            key: record.s3.object.key.clone(),
        }
    }
}

/// アップロード通知イベント
#[derive(Debug, Clone, Default)]
pub struct UploadEvent {
    records: Vec<S3EventRecord>,
}

impl UploadEvent {
    /// Lambdaペイロードからイベントを構築する
    ///
    /// S3イベント通知として解釈できない場合はレコード0件として扱う。
    pub fn from_payload(payload: Value) -> Self {
        let records = serde_json::from_value::<S3Event>(payload)
            .map(|event| event.records)
            .unwrap_or_default();
        Self { records }
    }

    /// 通知に含まれるレコード数
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// 通知に含まれるオブジェクトの概要
    pub fn records(&self) -> Vec<UploadedObject> {
        self.records.iter().map(UploadedObject::from).collect()
    }

    /// ログ出力用のオブジェクト位置一覧（`s3://bucket/key` のカンマ区切り）
    pub fn object_locations(&self) -> String {
        self.records()
            .iter()
            .map(UploadedObject::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}
