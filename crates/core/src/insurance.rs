//! Acme car-insurance eligibility.
//!
//! A linear chain of disqualifying checks over the applicants, the vehicle,
//! and their driving/insurance history, followed by a premium estimate for
//! eligible requests. Date-relative rules take an explicit reference date so
//! verdicts are reproducible.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::policy::Policy;

pub(crate) const LOCAL_COUNTRIES: [&str; 4] =
    ["us", "usa", "united states", "united states of america"];
const ISSUING_STATES: [&str; 4] = ["california", "texas", "florida", "ohio"];

const MINIMUM_CREDIT_SCORE: f64 = 500.0;
const CREDIT_SCORE_FEE_THRESHOLD: f64 = 650.0;
const MINOR_VIOLATION_THRESHOLD: usize = 3;
const BASE_PREMIUM: f64 = 1000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
}

impl Address {
    pub fn new(country: &str, state: &str) -> Self {
        Self {
            country: country.to_string(),
            state: state.to_string(),
        }
    }

    fn is_local(&self) -> bool {
        let country = self.country.to_lowercase();
        let state = self.state.to_lowercase();
        LOCAL_COUNTRIES.contains(&country.as_str()) && ISSUING_STATES.contains(&state.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseStatusRecord {
    pub status: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingViolation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Prior-coverage record; any flagged field can disqualify on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageRecord {
    #[serde(default)]
    pub lapse: bool,
    #[serde(default)]
    pub fraud: bool,
    #[serde(default)]
    pub claims: bool,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingLicense {
    pub status: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub status_history: Vec<LicenseStatusRecord>,
    pub issue_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub birth_date: NaiveDate,
    pub driving_license: DrivingLicense,
    #[serde(default)]
    pub family_members: Vec<Applicant>,
    #[serde(default)]
    pub driving_history: Vec<DrivingViolation>,
    #[serde(default)]
    pub history_insurance_coverage: Vec<CoverageRecord>,
    pub address: Address,
    #[serde(default)]
    pub is_primary_holder: bool,
    pub credit_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registered_on: Applicant,
    pub vehicle_use: String,
    #[serde(default)]
    pub passed_safety_inspections: bool,
    pub date_creation: NaiveDate,
    #[serde(default = "default_vehicle_type")]
    pub vehicle_type: String,
}

fn default_vehicle_type() -> String {
    "normal".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarInsuranceRequest {
    pub applicants: Vec<Applicant>,
    pub vehicle: Vehicle,
    pub liability_coverage: f64,
    pub state_min_liability: f64,
}

impl CarInsuranceRequest {
    pub fn primary_applicant(&self) -> Option<&Applicant> {
        self.applicants.iter().find(|a| a.is_primary_holder)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceOutcome {
    pub eligible: bool,
    pub premium_fee: Option<f64>,
    pub reason: String,
}

impl InsuranceOutcome {
    fn declined(reason: &str) -> Self {
        Self {
            eligible: false,
            premium_fee: None,
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CarInsurancePolicy;

impl CarInsurancePolicy {
    pub fn new() -> Self {
        Self
    }

    /// Runs the chain against an explicit reference date.
    pub fn evaluate_at(&self, case: &CarInsuranceRequest, today: NaiveDate) -> InsuranceOutcome {
        let Some(primary) = case.primary_applicant() else {
            return InsuranceOutcome::declined("No primary applicant found.");
        };

        let age = years_between(primary.birth_date, today);
        if age < 18 {
            return InsuranceOutcome::declined(
                "Primary policyholder must be at least 18 years old.",
            );
        }
        if age >= 75 {
            return InsuranceOutcome::declined(
                "Applicants over 75 may require additional medical assessments.",
            );
        }

        for applicant in &case.applicants {
            if applicant.driving_license.status != "valid" {
                return InsuranceOutcome::declined(
                    "All applicants must have a valid driver's license.",
                );
            }
            if applicant.driving_license.issue_date > today {
                return InsuranceOutcome::declined(
                    "All applicants must have an up-to-date driver's license.",
                );
            }
            let issue_country = applicant.driving_license.issue_country.to_lowercase();
            if !LOCAL_COUNTRIES.contains(&issue_country.as_str())
                && applicant.driving_history.is_empty()
            {
                return InsuranceOutcome::declined(
                    "International drivers must provide additional documentation or proof of driving history.",
                );
            }
        }

        let owner_valid = case.applicants.iter().any(|applicant| {
            case.vehicle.registered_on == *applicant
                || applicant.family_members.contains(&case.vehicle.registered_on)
        });
        if !owner_valid {
            return InsuranceOutcome::declined(
                "The vehicle must be registered in the name of the applicant or an immediate family member.",
            );
        }

        if case.vehicle.vehicle_use != "personal" {
            return InsuranceOutcome::declined(
                "The vehicle must be used primarily for personal use.",
            );
        }
        if !case.vehicle.passed_safety_inspections {
            return InsuranceOutcome::declined(
                "The vehicle must pass required safety inspections.",
            );
        }
        if years_between(case.vehicle.date_creation, today) > 20 {
            return InsuranceOutcome::declined("The vehicle older than 20 years cannot be covered");
        }

        let violation_window = today - Duration::days(5 * 365);
        let mut overall_minor_violations = 0usize;

        for applicant in &case.applicants {
            let mut minor_violations = 0usize;

            for violation in &applicant.driving_history {
                let Some(date) = violation.date else {
                    continue;
                };
                if date < violation_window {
                    continue;
                }
                // Exact-match types, matching the policy document wording.
                if violation.kind == "DUI" || violation.kind == "reckless driving" {
                    return InsuranceOutcome::declined("Major violations impact eligibility.");
                }
                minor_violations += 1;
            }
            if minor_violations >= MINOR_VIOLATION_THRESHOLD {
                return InsuranceOutcome::declined(
                    "Too many minor violations in the last five years.",
                );
            }

            for record in &applicant.driving_license.status_history {
                let recently = record.date.is_some_and(|date| date >= violation_window);
                if (record.status == "suspended" || record.status == "revoked") && recently {
                    return InsuranceOutcome::declined(
                        "Recent license suspensions or revocations result in disqualification.",
                    );
                }
            }

            overall_minor_violations += minor_violations;
        }

        for applicant in &case.applicants {
            let history = &applicant.history_insurance_coverage;
            if history.iter().any(|record| record.lapse) {
                return InsuranceOutcome::declined(
                    "Lapses in prior insurance coverage may impact eligibility.",
                );
            }
            if history.iter().any(|record| record.fraud) {
                return InsuranceOutcome::declined(
                    "A history of insurance fraud may impact eligibility.",
                );
            }
            if history.iter().filter(|record| record.claims).count() > 3 {
                return InsuranceOutcome::declined(
                    "Frequent insurance claims may impact eligibility.",
                );
            }
            if history
                .iter()
                .any(|record| record.cancellation_reason.as_deref() == Some("non-payment"))
            {
                return InsuranceOutcome::declined(
                    "Policy cancellations due to non-payment may impact eligibility.",
                );
            }
        }

        for applicant in &case.applicants {
            if !applicant.address.is_local() {
                return InsuranceOutcome::declined(
                    "All applicants must reside in the country and state where the policy is issued.",
                );
            }
        }

        if case.liability_coverage < case.state_min_liability {
            return InsuranceOutcome::declined(
                "Coverage must meet the state's minimum liability requirements.",
            );
        }

        for applicant in &case.applicants {
            if applicant.credit_score < MINIMUM_CREDIT_SCORE {
                return InsuranceOutcome::declined("Poor credit score impacts eligibility.");
            }
        }

        let mut premium_multiplier = 1.0;
        if age < 25 {
            premium_multiplier += 0.2;
        }
        if overall_minor_violations >= MINOR_VIOLATION_THRESHOLD {
            premium_multiplier += overall_minor_violations as f64 * 0.05;
        }
        for applicant in &case.applicants {
            if applicant.credit_score < CREDIT_SCORE_FEE_THRESHOLD {
                premium_multiplier += 0.1;
            }
        }

        InsuranceOutcome {
            eligible: true,
            premium_fee: Some(round2(BASE_PREMIUM * premium_multiplier)),
            reason: String::new(),
        }
    }
}

impl Policy for CarInsurancePolicy {
    type Request = CarInsuranceRequest;
    type Outcome = InsuranceOutcome;

    fn evaluate(&self, request: &CarInsuranceRequest) -> Result<InsuranceOutcome, PolicyError> {
        Ok(self.evaluate_at(request, Utc::now().date_naive()))
    }
}

/// Whole years by day count, the same approximation the policy document
/// applies to ages and vehicle years.
pub(crate) fn years_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days() / 365
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
