pub mod cultures;
pub mod report;
