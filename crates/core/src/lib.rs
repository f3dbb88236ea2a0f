pub mod error;
pub mod insurance;
pub mod loan;
pub mod luggage;
pub mod policy;
pub mod timeoff;

pub use error::PolicyError;
pub use insurance::{CarInsurancePolicy, CarInsuranceRequest, InsuranceOutcome};
pub use loan::{LoanApprovalPolicy, LoanOutcome, LoanRequest};
pub use luggage::{
    AgeCategory, ComplianceReport, ComplianceRequest, Dimensions, LuggageCompliance, LuggageItem,
    StorageTier, TravelClass,
};
pub use policy::Policy;
pub use timeoff::{Employee, TimeOffPolicy, TimeOffRequest, TimeOffSummary};
