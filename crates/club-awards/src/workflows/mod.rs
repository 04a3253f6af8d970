pub mod eligibility;
pub mod export;
pub mod reference;
pub mod roster;
