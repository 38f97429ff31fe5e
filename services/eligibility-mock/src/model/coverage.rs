use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Coding, Period};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageResponse {
    pub coverages: Vec<Coverage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub business_identifier: BusinessIdentifier,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: Coding,
    pub group_number: String,
    pub grp_billing_number: String,
    pub original_effective_date: String,
    #[serde(rename = "prefixSubscriberID")]
    pub prefix_subscriber_id: String,
    pub plan_prefix: String,
    pub dependent: String,
    pub relationship: Coding,
    pub eligibility_relationship: Coding,
    pub coverage_period: Period,
    pub market_segment_code: String,
    pub product_level: Vec<ProductLevel>,
    // Upstream sends this as an always-empty object.
    pub nasco_eligibility: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessIdentifier {
    #[serde(rename = "subscriberID")]
    pub subscriber_id: String,
    #[serde(rename = "masterRecordID", default, skip_serializing_if = "Option::is_none")]
    pub master_record_id: Option<String>,
    #[serde(rename = "personNumberExtID")]
    pub person_number_ext_id: String,
    #[serde(rename = "socialSecurityID")]
    pub social_security_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLevel {
    pub line_of_business: Coding,
    pub plan_name: Coding,
    pub product_category: Coding,
    pub coverage_package_code: String,
    #[serde(rename = "Network")]
    pub network: Map<String, Value>,
}
