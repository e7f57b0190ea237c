pub mod chart;
pub mod company;
pub mod ledger;
pub mod returns;
pub mod schema;
