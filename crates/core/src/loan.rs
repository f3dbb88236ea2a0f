//! Acme personal-loan approval.
//!
//! Same shape as the insurance chain: ordered disqualifying checks, then a
//! credit-tiered interest rate for approved requests.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::insurance::{round2, years_between, Address, LOCAL_COUNTRIES};
use crate::policy::Policy;

const ACCEPTED_INCOME_PROOFS: [&str; 3] = ["pay_stub", "tax_return", "bank_statement"];

const MINIMUM_CREDIT_SCORE: f64 = 600.0;
const MINIMUM_ANNUAL_INCOME: f64 = 30000.0;
const MAX_DEBT_TO_INCOME: f64 = 0.40;
const MIN_LOAN_AMOUNT: f64 = 5000.0;
const MAX_LOAN_AMOUNT: f64 = 50000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicant {
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub address: Option<Address>,
    pub credit_score: f64,
    pub annual_income: f64,
    #[serde(default)]
    pub income_document: Option<String>,
    pub employment_status: String,
    #[serde(default)]
    pub is_financial_record_present: bool,
    #[serde(default)]
    pub monthly_debt_amount: f64,
    #[serde(default)]
    pub monthly_gross_income: f64,
}

impl LoanApplicant {
    /// Debt-to-income ratio rounded to two places; zero when either monthly
    /// figure is missing.
    pub fn debt_to_income_ratio(&self) -> f64 {
        if self.monthly_debt_amount > 0.0 && self.monthly_gross_income > 0.0 {
            round2(self.monthly_debt_amount / self.monthly_gross_income)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub applicant: LoanApplicant,
    #[serde(default)]
    pub co_signer: Option<LoanApplicant>,
    pub loan_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOutcome {
    pub approved: bool,
    pub interest_rate: f64,
    pub message: String,
}

impl LoanOutcome {
    fn declined(message: &str) -> Self {
        Self {
            approved: false,
            interest_rate: 0.0,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoanApprovalPolicy;

impl LoanApprovalPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate_at(&self, case: &LoanRequest, today: NaiveDate) -> LoanOutcome {
        let applicant = &case.applicant;

        if years_between(applicant.birth_date, today) < 18 {
            let Some(co_signer) = &case.co_signer else {
                return LoanOutcome::declined(
                    "Applicant must be at least 18 years old or co-signer must be present.",
                );
            };
            if years_between(co_signer.birth_date, today) < 18 {
                return LoanOutcome::declined(
                    "Applicant must be at least 18 years old or co-signer must be at least 18 years old.",
                );
            }
        }

        let is_resident = applicant
            .address
            .as_ref()
            .is_some_and(|address| LOCAL_COUNTRIES.contains(&address.country.to_lowercase().as_str()));
        if !is_resident {
            return LoanOutcome::declined(
                "Applicant must be a resident or citizen of the United States.",
            );
        }

        if applicant.credit_score < MINIMUM_CREDIT_SCORE {
            return LoanOutcome::declined("Applicant must have a minimum credit score of 600.");
        }

        if applicant.annual_income < MINIMUM_ANNUAL_INCOME {
            return LoanOutcome::declined(
                "Applicant must have an annual income of at least $30,000.",
            );
        }

        let proof_accepted = applicant
            .income_document
            .as_deref()
            .is_some_and(|doc| ACCEPTED_INCOME_PROOFS.contains(&doc));
        if !proof_accepted {
            return LoanOutcome::declined(
                "Applicant must have an income document proof of at least $30,000.",
            );
        }

        if applicant.employment_status == "unemployed" {
            return LoanOutcome::declined("Unemployed applicant cannot get the loan.");
        }

        if applicant.employment_status == "self-employed" && !applicant.is_financial_record_present
        {
            return LoanOutcome::declined(
                "Self-employed applicants must provide 2 years of financial records.",
            );
        }

        if applicant.debt_to_income_ratio() > MAX_DEBT_TO_INCOME {
            return LoanOutcome::declined(
                "Applicant's debt-to-income ratio must not exceed 40%.",
            );
        }

        if !(MIN_LOAN_AMOUNT..=MAX_LOAN_AMOUNT).contains(&case.loan_amount) {
            return LoanOutcome::declined("Loan amount must be between $5,000 and $50,000.");
        }

        let interest_rate = interest_rate_for(applicant.credit_score);
        LoanOutcome {
            approved: true,
            interest_rate,
            message: format!("Loan approved with {interest_rate:.2}% APR."),
        }
    }
}

/// Two points off the 15% ceiling per 100 credit points above 600, floored
/// at 5%.
fn interest_rate_for(credit_score: f64) -> f64 {
    (15.0 - ((credit_score - 600.0) / 100.0) * 2.0).clamp(5.0, 15.0)
}

impl Policy for LoanApprovalPolicy {
    type Request = LoanRequest;
    type Outcome = LoanOutcome;

    fn evaluate(&self, request: &LoanRequest) -> Result<LoanOutcome, PolicyError> {
        Ok(self.evaluate_at(request, Utc::now().date_naive()))
    }
}
