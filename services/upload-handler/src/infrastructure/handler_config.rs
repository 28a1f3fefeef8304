// アップロードハンドラー設定
//
// コールドスタート時に環境変数から一度だけ読み込み、
// 以降の呼び出しではハンドラーに明示的に渡す。

/// シークレット参照ARNの環境変数名
pub const SECRETS_MANAGER_ARN_ENV: &str = "SECRETS_MANAGER_ARN";

/// アップロードハンドラー設定
///
/// 以下の環境変数から読み込む:
/// - SECRETS_MANAGER_ARN: Secrets ManagerシークレットのARN（任意）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    /// シークレット参照ARN（環境変数の値そのまま）
    secrets_manager_arn: Option<String>,
}

impl HandlerConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定でもエラーにはしない。UTF-8でない値は置換文字を含めて保持する。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(secrets_manager_arn: Option<String>) -> Self {
        Self { secrets_manager_arn }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(lookup(SECRETS_MANAGER_ARN_ENV))
    }

    /// シークレット参照ARNを取得（未設定・空白のみはNone）
    pub fn secrets_manager_arn(&self) -> Option<&str> {
        self.secrets_manager_arn
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// 環境変数は設定されているが空白のみかどうか
    pub fn is_secrets_manager_arn_blank(&self) -> bool {
        self.secrets_manager_arn
            .as_deref()
            .is_some_and(|s| s.trim().is_empty())
    }
}
