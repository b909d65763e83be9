//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{commands, registers, Nrf24Error, Nrf24l01};

mod config;
pub use config::RadioConfig;
