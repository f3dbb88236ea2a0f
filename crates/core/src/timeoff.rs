//! Acme time-off entitlements.
//!
//! Unlike the other policies this one never declines; it summarizes what an
//! employee is entitled to as of a reference date. Regular full-time staff
//! get the fixed holiday calendar, personal-choice days, tenure-based
//! vacation, and personal sick time; everyone else gets zeroes.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;
use crate::insurance::{round2, years_between};
use crate::policy::Policy;

const FIXED_HOLIDAYS: [&str; 8] = [
    "New Year's Day",
    "Martin Luther King Jr. Day",
    "Memorial Day",
    "Independence Day",
    "Labor Day",
    "Thanksgiving Day",
    "Day after Thanksgiving",
    "Christmas Day",
];

const ANNUAL_PST_HOURS: f64 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "regular full-time")]
    RegularFullTime,
    #[serde(rename = "part-time")]
    PartTime,
    #[serde(rename = "contractor")]
    Contractor,
    #[serde(other)]
    Other,
}

impl EmploymentType {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "regular full-time" => Self::RegularFullTime,
            "part-time" => Self::PartTime,
            "contractor" => Self::Contractor,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub employment_type: EmploymentType,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub supplemental: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    pub employee: Employee,
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffSummary {
    pub years_of_service: i64,
    pub fixed_holidays: Vec<String>,
    pub personal_choice_holidays: u32,
    pub vacation_weeks: u32,
    pub pst_hours: f64,
    pub total_days: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeOffPolicy;

impl TimeOffPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize_at(&self, employee: &Employee, reference_date: NaiveDate) -> TimeOffSummary {
        let years_of_service = years_between(employee.hire_date, reference_date);
        let full_time = employee.employment_type == EmploymentType::RegularFullTime;

        let fixed_holidays: Vec<String> = if full_time {
            FIXED_HOLIDAYS.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        };

        let personal_choice_holidays = if full_time && !employee.supplemental {
            4
        } else {
            0
        };

        let vacation_weeks = if !full_time {
            0
        } else if years_of_service < 10 {
            3
        } else if years_of_service < 20 {
            4
        } else if employee.hire_date < NaiveDate::from_ymd_opt(2004, 1, 1).unwrap() {
            5
        } else {
            4
        };

        let pst_hours = if full_time {
            prorated_pst_hours(employee.hire_date, reference_date)
        } else {
            0.0
        };

        let total_days = round2(
            fixed_holidays.len() as f64
                + personal_choice_holidays as f64
                + vacation_weeks as f64 * 5.0
                + pst_hours / 8.0,
        );

        TimeOffSummary {
            years_of_service,
            fixed_holidays,
            personal_choice_holidays,
            vacation_weeks,
            pst_hours,
            total_days,
        }
    }
}

/// First-year hires accrue PST by days worked over the calendar year.
fn prorated_pst_hours(hire_date: NaiveDate, reference_date: NaiveDate) -> f64 {
    let year = reference_date.year();
    if hire_date.year() != year {
        return ANNUAL_PST_HOURS;
    }
    let days_worked = (reference_date - hire_date).num_days() as f64;
    let days_in_year = if is_leap_year(year) { 366.0 } else { 365.0 };
    round2(days_worked / days_in_year * ANNUAL_PST_HOURS)
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

impl Policy for TimeOffPolicy {
    type Request = TimeOffRequest;
    type Outcome = TimeOffSummary;

    fn evaluate(&self, request: &TimeOffRequest) -> Result<TimeOffSummary, PolicyError> {
        let reference_date = request
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());
        Ok(self.summarize_at(&request.employee, reference_date))
    }
}
