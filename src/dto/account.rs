use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountFundsResponse {
    pub available_to_bet_balance: f64,
    pub exposure: f64,
    pub retained_commission: f64,
    pub exposure_limit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    pub points_balance: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_balance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// A registered application and its key-bearing versions, as returned by
/// `getDeveloperAppKeys`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApplication {
    pub app_name: String,
    pub app_id: u64,
    #[serde(default)]
    pub app_versions: Vec<DeveloperAppVersion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperAppVersion {
    #[serde(default)]
    pub owner: String,
    pub version_id: u64,
    #[serde(default)]
    pub version: String,
    pub application_key: String,
    #[serde(rename = "delayData", default)]
    pub delayed_data: bool,
    #[serde(default)]
    pub subscription_required: bool,
    #[serde(default)]
    pub owner_managed: bool,
    #[serde(default)]
    pub active: bool,
}
