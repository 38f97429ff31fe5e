use serde::{Deserialize, Serialize};

use super::Period;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "subscriberID")]
    pub subscriber_id: String,
    pub member_id: String,
    #[serde(rename = "socialSecurityID")]
    pub social_security_id: String,
    pub account_number: String,
    #[serde(rename = "masterRecordID", default, skip_serializing_if = "Option::is_none")]
    pub master_record_id: Option<String>,
    #[serde(rename = "personNumberExtID")]
    pub person_number_ext_id: String,
    pub group_number: String,
    pub member_effective: MemberEffective,
    pub active: bool,
    pub name: MemberNames,
    pub telecom: Vec<Telecom>,
    pub email: Vec<Email>,
    pub gender: String,
    pub birth_date: String,
    pub deceased_date_time: String,
    pub address: Vec<Address>,
    pub multiple_birth_integer: u32,
    #[serde(rename = "medicarePartAandBEffectiveDate")]
    pub medicare_part_a_and_b_effective_date: String,
    pub hospice_indicator: bool,
    #[serde(rename = "ESRDIndicator")]
    pub esrd_indicator: bool,
    pub direct_pay_indicator: bool,
    pub sex: String,
    pub medicare_detail: Vec<MedicareDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEffective {
    pub start_date: String,
    pub end_date: String,
    pub original_effective_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberNames {
    pub member_name: MemberName,
    pub normalized_name: NormalizedName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberName {
    pub full_name: String,
    pub last_name: String,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedName {
    pub normalized_last_name: String,
    pub normalized_first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telecom {
    pub phone_type: String,
    pub phone_number1: String,
    pub phone_number2: String,
    pub phone_rank: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub email: String,
    pub email_rank: String,
    pub email_source_indicator: String,
    pub current_email_indicator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "use")]
    pub use_: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub addressline1: String,
    pub city: String,
    pub district: String,
    pub state: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicareDetail {
    pub coverage_period: Period,
    pub eligibility_relationship: EligibilityStatus,
    pub type_of_contract: String,
    pub type_of_contract_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityStatus {
    pub member_status: String,
    pub member_status_description: String,
}
