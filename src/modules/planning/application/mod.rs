pub mod domain;
pub mod planning_use_cases;
pub mod ports;
pub mod services;
