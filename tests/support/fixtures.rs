//! Credential payload fixtures.

/// Container credentials endpoint shape.
pub const FLAT: &str = r#"{"AccessKeyId":"AK1","SecretAccessKey":"SK1","Token":"TK1"}"#;

/// `aws sts assume-role` shape.
pub const NESTED: &str =
    r#"{"Credentials":{"AccessKeyId":"AK2","SecretAccessKey":"SK2","SessionToken":"TK2"}}"#;

/// Full container endpoint response, extra fields included.
pub const FLAT_FULL: &str = r#"{
  "RoleArn": "arn:aws:iam::123456789012:role/codebuild",
  "AccessKeyId": "ASIAEXAMPLE",
  "SecretAccessKey": "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
  "Token": "IQoJb3JpZ2luX2VjEXAMPLE+TOKEN==",
  "Expiration": "2026-10-14T18:00:00Z"
}"#;

/// Flat payload without the token.
pub const MISSING_TOKEN: &str = r#"{"AccessKeyId":"AK1","SecretAccessKey":"SK1"}"#;

/// Nested payload without the session token.
pub const MISSING_SESSION_TOKEN: &str =
    r#"{"Credentials":{"AccessKeyId":"AK2","SecretAccessKey":"SK2"}}"#;

/// Build a flat payload from arbitrary values.
pub fn flat(ak: &str, sk: &str, tk: &str) -> String {
    serde_json::json!({"AccessKeyId": ak, "SecretAccessKey": sk, "Token": tk}).to_string()
}

/// Flat payload whose secret carries an escaped NUL.
pub const NUL_SECRET: &str =
    r#"{"AccessKeyId":"AK1","SecretAccessKey":"TOPSECRET\u0000X","Token":"TK1"}"#;
