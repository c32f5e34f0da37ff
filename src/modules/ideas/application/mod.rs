pub mod domain;
pub mod idea_use_cases;
pub mod ports;
pub mod services;
