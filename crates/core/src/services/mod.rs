pub mod ledger_service;
pub mod projection_service;
pub mod search_service;
pub mod series_service;
