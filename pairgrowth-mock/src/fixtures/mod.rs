pub mod chart;
pub mod history;
