pub mod reporters;
pub mod reports;
