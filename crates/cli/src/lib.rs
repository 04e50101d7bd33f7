//! Start-up plumbing and console reports shared by the gradebook maintenance tools.

pub mod app;
pub mod report;
