pub mod domain;
pub mod ports;
pub mod portfolio_use_cases;
pub mod services;
