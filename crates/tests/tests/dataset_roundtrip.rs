use std::path::PathBuf;

use chrono::NaiveDate;

use acme_core::{
    AgeCategory, CarInsurancePolicy, ComplianceRequest, Dimensions, LoanApprovalPolicy,
    LuggageCompliance, LuggageItem, StorageTier, TravelClass,
};
use acme_dataset::{
    label_insurance, label_loan, label_luggage, load_jsonl, save_jsonl, LabeledLuggageCase,
};

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("acme-dataset-{}-{}.jsonl", std::process::id(), name))
}

fn compliant_request() -> ComplianceRequest {
    ComplianceRequest::new(TravelClass::Economy, AgeCategory::Adult).with_luggage(
        LuggageItem::new(StorageTier::CarryOn, 5.0, Dimensions::cm(50.0, 38.0, 20.0)),
    )
}

fn oversize_request() -> ComplianceRequest {
    ComplianceRequest::new(TravelClass::Business, AgeCategory::Adult).with_luggage(
        LuggageItem::new(StorageTier::Checked, 6.0, Dimensions::cm(159.0, 10.0, 10.0)),
    )
}

#[test]
fn labeled_luggage_rows_survive_a_jsonl_round_trip() {
    let policy = LuggageCompliance::standard();
    let rows = vec![
        label_luggage(&policy, compliant_request()).unwrap(),
        label_luggage(&policy, oversize_request()).unwrap(),
    ];

    let path = scratch_file("luggage");
    save_jsonl(&path, &rows).unwrap();
    let loaded: Vec<LabeledLuggageCase> = load_jsonl(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, rows);
    assert!(loaded[0].eligibility);
    assert!(!loaded[1].eligibility);
    assert_eq!(loaded[1].fees, 100.0);
}

#[test]
fn label_columns_mirror_the_verdict() {
    let policy = LuggageCompliance::standard();
    let case = label_luggage(&policy, oversize_request()).unwrap();

    assert!(!case.compliance_result);
    assert!(case.compliance_message.contains("above size limit"));
    assert!(case.cargo_items.is_empty());
}

#[test]
fn insurance_and_loan_labels_pin_the_reference_date() {
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    let raw_insurance = r#"{
        "applicants": [{
            "birth_date": "1994-06-01",
            "driving_license": {
                "status": "valid",
                "issue_date": "2014-06-01",
                "issue_country": "us"
            },
            "address": {"country": "us", "state": "california"},
            "is_primary_holder": true,
            "credit_score": 700.0
        }],
        "vehicle": {
            "registered_on": {
                "birth_date": "1994-06-01",
                "driving_license": {
                    "status": "valid",
                    "issue_date": "2014-06-01",
                    "issue_country": "us"
                },
                "address": {"country": "us", "state": "california"},
                "is_primary_holder": true,
                "credit_score": 700.0
            },
            "vehicle_use": "personal",
            "passed_safety_inspections": true,
            "date_creation": "2019-06-01"
        },
        "liability_coverage": 50000.0,
        "state_min_liability": 25000.0
    }"#;
    let insurance_request = serde_json::from_str(raw_insurance).unwrap();
    let insurance = label_insurance(&CarInsurancePolicy::new(), insurance_request, as_of);
    assert!(insurance.eligible);
    assert_eq!(insurance.premium_fee, Some(1000.0));

    let raw_loan = r#"{
        "applicant": {
            "birth_date": "1994-06-01",
            "address": {"country": "US", "state": ""},
            "credit_score": 700.0,
            "annual_income": 50000.0,
            "income_document": "pay_stub",
            "employment_status": "stable",
            "monthly_debt_amount": 1000.0,
            "monthly_gross_income": 5000.0
        },
        "loan_amount": 20000.0
    }"#;
    let loan_request = serde_json::from_str(raw_loan).unwrap();
    let loan = label_loan(&LoanApprovalPolicy::new(), loan_request, as_of);
    assert!(loan.eligibility);
    assert_eq!(loan.interest_rate, 13.0);
    assert_eq!(loan.reason, "Loan approved with 13.00% APR.");
}
