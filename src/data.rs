pub mod cultures;
