//! Labeled-case records for the policy benchmark datasets.
//!
//! Each record flattens the request next to the verdict columns so a row
//! reads as one flat object on disk. Persistence is JSON Lines, one record
//! per line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use acme_core::{
    CarInsurancePolicy, CarInsuranceRequest, ComplianceRequest, LoanApprovalPolicy, LoanRequest,
    LuggageCompliance, LuggageItem, PolicyError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledLuggageCase {
    #[serde(flatten)]
    pub request: ComplianceRequest,
    pub eligibility: bool,
    pub compliance_result: bool,
    pub compliance_message: String,
    pub moved_to_checked: Vec<LuggageItem>,
    pub cargo_items: Vec<LuggageItem>,
    pub fees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledInsuranceCase {
    #[serde(flatten)]
    pub request: CarInsuranceRequest,
    pub eligible: bool,
    pub premium_fee: Option<f64>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledLoanCase {
    #[serde(flatten)]
    pub request: LoanRequest,
    pub eligibility: bool,
    pub interest_rate: f64,
    pub reason: String,
}

/// Runs the checker and pins its verdict onto the request as label columns.
pub fn label_luggage(
    policy: &LuggageCompliance,
    request: ComplianceRequest,
) -> Result<LabeledLuggageCase, PolicyError> {
    let report = policy.evaluate(&request)?;
    Ok(LabeledLuggageCase {
        request,
        eligibility: report.compliant && report.cargo_items.is_empty(),
        compliance_result: report.compliant,
        compliance_message: report.message,
        moved_to_checked: report.moved_to_checked,
        cargo_items: report.cargo_items,
        fees: report.fees,
    })
}

pub fn label_insurance(
    policy: &CarInsurancePolicy,
    request: CarInsuranceRequest,
    as_of: NaiveDate,
) -> LabeledInsuranceCase {
    let outcome = policy.evaluate_at(&request, as_of);
    LabeledInsuranceCase {
        request,
        eligible: outcome.eligible,
        premium_fee: outcome.premium_fee,
        reason: outcome.reason,
    }
}

pub fn label_loan(
    policy: &LoanApprovalPolicy,
    request: LoanRequest,
    as_of: NaiveDate,
) -> LabeledLoanCase {
    let outcome = policy.evaluate_at(&request, as_of);
    LabeledLoanCase {
        request,
        eligibility: outcome.approved,
        interest_rate: outcome.interest_rate,
        reason: outcome.message,
    }
}

pub fn save_jsonl<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed creating dataset file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("failed opening dataset file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("malformed record on line {} of {}", index + 1, path.display()))?;
        records.push(record);
    }
    Ok(records)
}
