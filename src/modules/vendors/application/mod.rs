pub mod domain;
pub mod ports;
pub mod services;
pub mod vendor_use_cases;
