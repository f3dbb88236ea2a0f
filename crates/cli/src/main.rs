use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use acme_core::{
    CarInsurancePolicy, CarInsuranceRequest, ComplianceRequest, Employee, LoanApprovalPolicy,
    LoanRequest, LuggageCompliance, TimeOffPolicy,
};
use acme_dataset::{label_luggage, load_jsonl, save_jsonl, LabeledLuggageCase};
use acme_observability::{init_tracing, PolicyMetrics};

#[derive(Debug, Parser)]
#[command(name = "acme-policy")]
#[command(about = "Acme policy checker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Luggage {
        #[command(subcommand)]
        command: LuggageCommand,
    },
    Insurance {
        #[command(subcommand)]
        command: InsuranceCommand,
    },
    Loan {
        #[command(subcommand)]
        command: LoanCommand,
    },
    TimeOff {
        #[command(subcommand)]
        command: TimeOffCommand,
    },
}

#[derive(Debug, Subcommand)]
enum LuggageCommand {
    /// Evaluate a single request file and print the report.
    Evaluate { file: PathBuf },
    /// Label a JSONL file of requests into a labeled dataset.
    Label { input: PathBuf, output: PathBuf },
}

#[derive(Debug, Subcommand)]
enum InsuranceCommand {
    Evaluate {
        file: PathBuf,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

#[derive(Debug, Subcommand)]
enum LoanCommand {
    Evaluate {
        file: PathBuf,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

#[derive(Debug, Subcommand)]
enum TimeOffCommand {
    Summary {
        file: PathBuf,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    init_tracing("acme_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Luggage { command } => match command {
            LuggageCommand::Evaluate { file } => {
                let request: ComplianceRequest = read_json(&file)?;
                let report = LuggageCompliance::standard().evaluate(&request)?;
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            LuggageCommand::Label { input, output } => {
                label_luggage_file(&input, &output)?;
            }
        },
        Command::Insurance { command } => match command {
            InsuranceCommand::Evaluate { file, as_of } => {
                let request: CarInsuranceRequest = read_json(&file)?;
                let outcome =
                    CarInsurancePolicy::new().evaluate_at(&request, reference_date(as_of));
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
        },
        Command::Loan { command } => match command {
            LoanCommand::Evaluate { file, as_of } => {
                let request: LoanRequest = read_json(&file)?;
                let outcome = LoanApprovalPolicy::new().evaluate_at(&request, reference_date(as_of));
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
        },
        Command::TimeOff { command } => match command {
            TimeOffCommand::Summary { file, as_of } => {
                let employee: Employee = read_json(&file)?;
                let summary = TimeOffPolicy::new().summarize_at(&employee, reference_date(as_of));
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        },
    }

    Ok(())
}

fn label_luggage_file(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let metrics = PolicyMetrics::shared();
    let policy = LuggageCompliance::standard();
    let requests: Vec<ComplianceRequest> = load_jsonl(input)?;

    let mut labeled: Vec<LabeledLuggageCase> = Vec::with_capacity(requests.len());
    for request in requests {
        let started = Instant::now();
        let case = label_luggage(&policy, request).context("luggage request failed validation")?;

        metrics.inc_evaluation();
        metrics.observe_latency(started.elapsed());
        metrics.add_fees(case.fees);
        if !case.compliance_result {
            metrics.inc_non_compliant();
        }
        if !case.cargo_items.is_empty() {
            metrics.inc_cargo_flagged();
        }

        labeled.push(case);
    }

    save_jsonl(output, &labeled)?;

    let snapshot = metrics.snapshot();
    tracing::info!(
        evaluations = snapshot.evaluations_total,
        non_compliant = snapshot.non_compliant_total,
        cargo_flagged = snapshot.cargo_flagged_total,
        fees_total = snapshot.fees_total,
        "labeled luggage dataset written to {}",
        output.display()
    );

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing request file {}", path.display()))
}

fn reference_date(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Utc::now().date_naive())
}
