//! Portfolio module - valuation engine, selection resolver and the dashboard
//! composition built on top of them.

pub mod dashboard;
pub mod selection;
pub mod valuation;
