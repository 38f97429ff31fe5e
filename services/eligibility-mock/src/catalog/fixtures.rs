use serde_json::Map;

use super::FixtureCatalog;
use crate::error::CatalogError;
use crate::model::accumulator::{
    AccumMember, Benefit, BenefitMaximum, BenefitMaximums, Group, MemberCost, MemberCostComponent, Plan,
    PlanBenefitsAndAccums, PlanLevelBenefitInfo,
};
use crate::model::coverage::{BusinessIdentifier, Coverage, ProductLevel};
use crate::model::member::{
    Address, EligibilityStatus, Email, MedicareDetail, Member, MemberEffective, MemberName, MemberNames,
    NormalizedName, Telecom,
};
use crate::model::{
    AccumulatorResponse, Coding, CoverageResponse, Issue, IssueDetail, MemberResponse, OperationOutcome, Period,
    PlainError, Severity,
};
use crate::variant::{ResponsePayload, Variant};

const OPEN_ENDED: &str = "3000-12-31";
const SHORT_LIVED_END: &str = "2025-09-04";
const REMAINING: &str = "6450.0";

/// The catalog every deployment serves.
pub fn standard() -> Result<FixtureCatalog, CatalogError> {
    FixtureCatalog::builder()
        .register("m-a", "Search for member with ID 'm-a'", ResponsePayload::Member(Variant::Success(members(member()))))
        .register(
            "m-b-m-n",
            "Search for member with ID 'm-b-m-n'",
            ResponsePayload::Member(Variant::SuccessWithOmission {
                body: members(Member { master_record_id: None, ..member() }),
                omitted: vec!["/members/0/masterRecordID"],
            }),
        )
        .register(
            "m-n-a-c",
            "Search for member with ID 'm-n-a-c'",
            ResponsePayload::Member(Variant::Success(members(Member {
                member_effective: MemberEffective { end_date: SHORT_LIVED_END.into(), ..member_effective() },
                ..member()
            }))),
        )
        .register(
            "m-e-r",
            "Error response for member search",
            ResponsePayload::Member(Variant::PlainError(PlainError::no_info_found())),
        )
        .register(
            "c-s",
            "Search for coverage with ID 'c-s'",
            ResponsePayload::Coverage(Variant::Success(coverages(coverage(OPEN_ENDED, true)))),
        )
        .register(
            "c-n-m-id",
            "Search for coverage with ID 'c-n-m-id'",
            ResponsePayload::Coverage(Variant::SuccessWithOmission {
                body: coverages(coverage(OPEN_ENDED, false)),
                omitted: vec!["/coverages/0/businessIdentifier/masterRecordID"],
            }),
        )
        .register(
            "c-n-a-c",
            "Search for coverage with ID 'c-n-a-c'",
            ResponsePayload::Coverage(Variant::Success(coverages(coverage(SHORT_LIVED_END, true)))),
        )
        .register(
            "c-e-r",
            "Error response for coverage search",
            ResponsePayload::Coverage(Variant::PlainError(PlainError::no_info_found())),
        )
        .register(
            "acc-succ",
            "Search for accumulator with ID 'acc-succ'",
            ResponsePayload::Accumulator(Variant::Success(accumulators([true, true]))),
        )
        .register(
            "acc-rem-amt-miss",
            "Search for accumulator with ID 'acc-rem-amt-miss'",
            ResponsePayload::Accumulator(Variant::SuccessWithOmission {
                body: accumulators([false, true]),
                omitted: vec![
                    "/planBenefitsAndAccums/0/planLevelBenefitInfo/benefitMaximums/benefitMaximum/0/remainingAmount",
                    "/planBenefitsAndAccums/0/planLevelBenefitInfo/memberCost/memberCostComponent/0/remainingAmount",
                ],
            }),
        )
        .register(
            "acc-f",
            "Search for accumulator with ID 'acc-f' (failure case)",
            ResponsePayload::Accumulator(Variant::Failure { outcome: nasco_outcome(), body: accumulators([false, false]) }),
        )
        .build()
}

fn members(member: Member) -> MemberResponse {
    MemberResponse { members: vec![member] }
}

fn member_effective() -> MemberEffective {
    MemberEffective {
        start_date: "2025-08-15".into(),
        end_date: OPEN_ENDED.into(),
        original_effective_date: "2025-08-15".into(),
    }
}

fn member() -> Member {
    Member {
        subscriber_id: "1234567890000".into(),
        member_id: "00".into(),
        social_security_id: "12345678".into(),
        account_number: "7634526".into(),
        master_record_id: Some("123qwerty".into()),
        person_number_ext_id: "1234567890000TAN".into(),
        group_number: "7634526".into(),
        member_effective: member_effective(),
        active: true,
        name: MemberNames {
            member_name: MemberName {
                full_name: "TEST USER".into(),
                last_name: "USER".into(),
                first_name: "TEST".into(),
            },
            normalized_name: NormalizedName {
                normalized_last_name: "USER".into(),
                normalized_first_name: "TEST".into(),
            },
        },
        telecom: vec![Telecom {
            phone_type: "G".into(),
            phone_number1: "0000000000".into(),
            phone_number2: "0000000000".into(),
            phone_rank: "1".into(),
        }],
        email: vec![Email {
            email: "TEST@YOPMAIL.com".into(),
            email_rank: "1".into(),
            email_source_indicator: "TEST_SITE".into(),
            current_email_indicator: "Y".into(),
        }],
        gender: "female".into(),
        birth_date: "09-09-26".into(),
        deceased_date_time: "9999-12-31".into(),
        address: vec![Address {
            use_: "home".into(),
            kind: "G".into(),
            addressline1: "KOLKATA".into(),
            city: "KOLKATA".into(),
            district: "090".into(),
            state: "WB".into(),
            postal_code: "7000001".into(),
            period: Period::new("1900-01-01", "9999-12-31"),
        }],
        multiple_birth_integer: 0,
        medicare_part_a_and_b_effective_date: "1900-01-01".into(),
        hospice_indicator: false,
        esrd_indicator: false,
        direct_pay_indicator: false,
        sex: "F".into(),
        medicare_detail: vec![MedicareDetail {
            coverage_period: Period::new("2025-08-15", OPEN_ENDED),
            eligibility_relationship: EligibilityStatus {
                member_status: "10".into(),
                member_status_description: "ACTIVE MEMBER".into(),
            },
            type_of_contract: "101".into(),
            type_of_contract_display: "Member only".into(),
        }],
    }
}

// Every coverage list carries the current coverage first, then last year's.
fn coverages(current: Coverage) -> CoverageResponse {
    CoverageResponse { coverages: vec![current, coverage_with_period(Period::new("2024-08-25", "2025-08-25"), true)] }
}

fn coverage(end: &str, with_master_record: bool) -> Coverage {
    coverage_with_period(Period::new("2025-08-25", end), with_master_record)
}

fn coverage_with_period(coverage_period: Period, with_master_record: bool) -> Coverage {
    Coverage {
        business_identifier: BusinessIdentifier {
            subscriber_id: "123456789".into(),
            master_record_id: with_master_record.then(|| "qwerty123".into()),
            person_number_ext_id: "123456789JOE".into(),
            social_security_id: "qwerty321".into(),
        },
        status: "active".into(),
        kind: Coding::new("M", "Medical"),
        group_number: "1111111".into(),
        grp_billing_number: "0000".into(),
        original_effective_date: "2025-08-25".into(),
        prefix_subscriber_id: "ABC123456789".into(),
        plan_prefix: "HHV".into(),
        dependent: "10".into(),
        relationship: Coding::new("10", "Dependent"),
        eligibility_relationship: Coding::new("45", "Dependent Child"),
        coverage_period,
        market_segment_code: "Commercial".into(),
        product_level: vec![ProductLevel {
            line_of_business: Coding::new("A1", "Medical"),
            plan_name: Coding::new("10017", "LIC"),
            product_category: Coding::new("3", "Preferred Provider Plan"),
            coverage_package_code: "123456".into(),
            network: Map::new(),
        }],
        nasco_eligibility: Map::new(),
    }
}

/// `remaining[i]` controls whether the i-th maximum and the i-th cost component
/// carry a `remainingAmount`.
fn accumulators(remaining: [bool; 2]) -> AccumulatorResponse {
    let remaining_amount = |i: usize| remaining[i].then(|| REMAINING.to_string());
    AccumulatorResponse {
        member: AccumMember {
            subscriber_id: "123456789".into(),
            member_suffix: "01".into(),
            first_name: "TEST".into(),
            last_name: "MEMBER".into(),
            gender: "female".into(),
            date_of_birth: "2089-01-06".into(),
        },
        plan_benefits_and_accums: vec![PlanBenefitsAndAccums {
            plan: Plan {
                type_id: "127".into(),
                marketing_name: "TEST".into(),
                plan_name: "TEST".into(),
                kind: "TEST".into(),
                description: "Group, Nongroup".into(),
            },
            group: Group {
                name: "TEST INC.".into(),
                id: "12345".into(),
                anniversary_date: "0101".into(),
                lob: "A1".into(),
            },
            benefit: Benefit {
                benefit_string: "1234".into(),
                limit_string: "4567".into(),
                utilization_review_string: "99999".into(),
                benefit_name: "1234".into(),
            },
            plan_level_benefit_info: PlanLevelBenefitInfo {
                benefit_maximums: BenefitMaximums {
                    benefit_maximum: vec![
                        benefit_maximum("12345", "6450.0", remaining_amount(0)),
                        benefit_maximum("67890", "123.0", remaining_amount(1)),
                    ],
                },
                member_cost: MemberCost {
                    member_cost_component: vec![
                        cost_component("123456", "per individual TEST", "TEST", remaining_amount(0)),
                        cost_component("05105", "TEST", "per plan TEST", remaining_amount(1)),
                    ],
                },
            },
        }],
    }
}

fn benefit_maximum(nasco_accum_id: &str, amount: &str, remaining_amount: Option<String>) -> BenefitMaximum {
    BenefitMaximum {
        nasco_accum_id: nasco_accum_id.into(),
        network: "In/Out".into(),
        maximum_type: "OutOfPocket".into(),
        amount: amount.into(),
        remaining_amount,
        unit: "TEST UNIT".into(),
        period: "TEST PERIOD".into(),
        provisional_text: "TEST".into(),
    }
}

fn cost_component(nasco_accum_id: &str, unit: &str, period: &str, remaining_amount: Option<String>) -> MemberCostComponent {
    MemberCostComponent {
        nasco_accum_id: nasco_accum_id.into(),
        network: "In/Out".into(),
        cost_type: "Deductible".into(),
        amount: "123.0".into(),
        remaining_amount,
        unit: unit.into(),
        period: period.into(),
        provisional_text: "TEST".into(),
    }
}

fn nasco_outcome() -> OperationOutcome {
    OperationOutcome {
        issue: vec![Issue {
            severity: Severity::Warning,
            code: "00027".into(),
            details: vec![IssueDetail { text: "NASCO error: XXXXX".into() }],
            diagnostics: "ReqID - 1234: NASCO error: TEST".into(),
        }],
    }
}
