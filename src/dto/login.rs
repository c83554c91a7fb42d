use serde::{Deserialize, Serialize};

pub const LOGIN_SUCCESS: &str = "SUCCESS";

/// Response of the interactive (`restLogin`) endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveLoginResponse {
    pub token: String,
    pub product: String,
    pub status: String,
    pub error: String,
}

/// Response of the certificate (`certLogin`) endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertLoginResponse {
    pub session_token: String,
    pub login_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_response_tolerates_missing_fields() {
        let resp: InteractiveLoginResponse =
            serde_json::from_str(r#"{"status":"FAIL","error":"INVALID_USERNAME_OR_PASSWORD"}"#)
                .unwrap();
        assert_eq!(resp.status, "FAIL");
        assert_eq!(resp.error, "INVALID_USERNAME_OR_PASSWORD");
        assert!(resp.token.is_empty());
    }

    #[test]
    fn test_cert_response_uses_camel_case() {
        let resp: CertLoginResponse =
            serde_json::from_str(r#"{"sessionToken":"abc","loginStatus":"SUCCESS"}"#).unwrap();
        assert_eq!(resp.session_token, "abc");
        assert_eq!(resp.login_status, LOGIN_SUCCESS);
    }
}
