/// Secrets Manager ARN
///
/// `arn:<partition>:secretsmanager:<region>:<account-id>:secret:<secret-name>`
/// 形式のシークレット参照を構成要素に分解する。
/// シークレットの値そのものは扱わない（参照先の識別子のみ）。
use thiserror::Error;

/// ARN解析のエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretArnError {
    /// ARNの形式ではない
    #[error("ARNの形式ではありません: {0}")]
    MalformedArn(String),
    /// サービスがsecretsmanagerではない
    #[error("secretsmanager以外のサービスです: {0}")]
    UnexpectedService(String),
    /// リソースタイプがsecretではない
    #[error("secret以外のリソースタイプです: {0}")]
    UnexpectedResourceType(String),
    /// 必須の構成要素が空
    #[error("ARNの構成要素が空です: {0}")]
    EmptyComponent(&'static str),
}

/// 解析済みのSecrets Manager ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretArn {
    partition: String,
    region: String,
    account_id: String,
    secret_name: String,
}

impl SecretArn {
    const PREFIX: &'static str = "arn";
    const SERVICE: &'static str = "secretsmanager";
    const RESOURCE_TYPE: &'static str = "secret";

    /// ARN文字列を解析する
    ///
    /// シークレット名にはコロンを含めない（Secrets Managerの命名規則）。
    /// 末尾のランダムサフィックス（`-AbCdEf`）はシークレット名の一部として保持する。
    pub fn parse(arn: &str) -> Result<Self, SecretArnError> {
        let parts: Vec<&str> = arn.trim().split(':').collect();
        if parts.len() != 7 || parts[0] != Self::PREFIX {
            return Err(SecretArnError::MalformedArn(arn.to_string()));
        }

        if parts[2] != Self::SERVICE {
            return Err(SecretArnError::UnexpectedService(parts[2].to_string()));
        }
        if parts[5] != Self::RESOURCE_TYPE {
            return Err(SecretArnError::UnexpectedResourceType(parts[5].to_string()));
        }

        let component = |value: &str, name: &'static str| {
            if value.is_empty() {
                Err(SecretArnError::EmptyComponent(name))
            } else {
                Ok(value.to_string())
            }
        };

        Ok(Self {
            partition: component(parts[1], "partition")?,
            region: component(parts[3], "region")?,
            account_id: component(parts[4], "account_id")?,
            secret_name: component(parts[6], "secret_name")?,
        })
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ARN: &str =
        "arn:aws:secretsmanager:ap-northeast-1:123456789012:secret:upload/api-key-AbCdEf";

    #[test]
    fn test_parse_valid_arn() {
        let arn = SecretArn::parse(VALID_ARN).unwrap();

        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.region(), "ap-northeast-1");
        assert_eq!(arn.account_id(), "123456789012");
        assert_eq!(arn.secret_name(), "upload/api-key-AbCdEf");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let arn = SecretArn::parse(&format!("  {}\n", VALID_ARN)).unwrap();
        assert_eq!(arn.secret_name(), "upload/api-key-AbCdEf");
    }

    #[test]
    fn test_parse_china_partition() {
        let arn =
            SecretArn::parse("arn:aws-cn:secretsmanager:cn-north-1:123456789012:secret:foo").unwrap();
        assert_eq!(arn.partition(), "aws-cn");
        assert_eq!(arn.region(), "cn-north-1");
    }

    #[test]
    fn test_parse_rejects_non_arn() {
        let result = SecretArn::parse("my-secret");
        assert_eq!(result, Err(SecretArnError::MalformedArn("my-secret".to_string())));
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        let result = SecretArn::parse("arn:aws:secretsmanager:us-east-1:123456789012:secret");
        assert!(matches!(result, Err(SecretArnError::MalformedArn(_))));
    }

    #[test]
    fn test_parse_rejects_other_service() {
        let result = SecretArn::parse("arn:aws:ssm:us-east-1:123456789012:parameter:foo");
        assert_eq!(result, Err(SecretArnError::UnexpectedService("ssm".to_string())));
    }

    #[test]
    fn test_parse_rejects_other_resource_type() {
        let result = SecretArn::parse("arn:aws:secretsmanager:us-east-1:123456789012:key:foo");
        assert_eq!(
            result,
            Err(SecretArnError::UnexpectedResourceType("key".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty_region() {
        let result = SecretArn::parse("arn:aws:secretsmanager::123456789012:secret:foo");
        assert_eq!(result, Err(SecretArnError::EmptyComponent("region")));
    }

    #[test]
    fn test_parse_rejects_empty_secret_name() {
        let result = SecretArn::parse("arn:aws:secretsmanager:us-east-1:123456789012:secret:");
        assert_eq!(result, Err(SecretArnError::EmptyComponent("secret_name")));
    }

    #[test]
    fn test_error_display() {
        let error = SecretArnError::UnexpectedService("s3".to_string());
        assert_eq!(error.to_string(), "secretsmanager以外のサービスです: s3");
    }
}
