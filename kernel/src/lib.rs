pub mod debug;
pub mod guess;
pub mod kconfig;
pub mod random_service;
pub mod session;
