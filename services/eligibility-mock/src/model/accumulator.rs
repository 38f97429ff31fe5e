use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatorResponse {
    pub member: AccumMember,
    pub plan_benefits_and_accums: Vec<PlanBenefitsAndAccums>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumMember {
    pub subscriber_id: String,
    pub member_suffix: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBenefitsAndAccums {
    pub plan: Plan,
    pub group: Group,
    pub benefit: Benefit,
    pub plan_level_benefit_info: PlanLevelBenefitInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub type_id: String,
    pub marketing_name: String,
    pub plan_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    pub id: String,
    pub anniversary_date: String,
    pub lob: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    pub benefit_string: String,
    pub limit_string: String,
    pub utilization_review_string: String,
    pub benefit_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLevelBenefitInfo {
    pub benefit_maximums: BenefitMaximums,
    pub member_cost: MemberCost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitMaximums {
    pub benefit_maximum: Vec<BenefitMaximum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitMaximum {
    pub nasco_accum_id: String,
    pub network: String,
    pub maximum_type: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_amount: Option<String>,
    pub unit: String,
    pub period: String,
    pub provisional_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCost {
    pub member_cost_component: Vec<MemberCostComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCostComponent {
    pub nasco_accum_id: String,
    pub network: String,
    pub cost_type: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_amount: Option<String>,
    pub unit: String,
    pub period: String,
    pub provisional_text: String,
}
