#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l01::new()`](fn@crate::radio::Nrf24l01::new)
//! - [`Nrf24l01::set_config()`](radio/struct.Nrf24l01.html#method.set_config)
//! - [`Nrf24l01::configure()`](radio/struct.Nrf24l01.html#method.configure)
//! - [`Nrf24l01::transmit()`](radio/struct.Nrf24l01.html#method.transmit)
//! - [`Nrf24l01::transmit_polling()`](radio/struct.Nrf24l01.html#method.transmit_polling)
//! - [`Nrf24l01::receive()`](radio/struct.Nrf24l01.html#method.receive)
//! - [`Nrf24l01::receive_polling()`](radio/struct.Nrf24l01.html#method.receive_polling)
//! - [`Nrf24l01::handle_tx_irq()`](radio/struct.Nrf24l01.html#method.handle_tx_irq)
//!
//! ## Advanced API
//!
//! - [`Nrf24l01::status()`](radio/struct.Nrf24l01.html#method.status)
//! - [`Nrf24l01::fifo_status()`](radio/struct.Nrf24l01.html#method.fifo_status)
//! - [`Nrf24l01::available()`](radio/struct.Nrf24l01.html#method.available)
//! - [`Nrf24l01::clear_tx_ds()`](radio/struct.Nrf24l01.html#method.clear_tx_ds)
//! - [`Nrf24l01::clear_max_rt()`](radio/struct.Nrf24l01.html#method.clear_max_rt)
//! - [`Nrf24l01::clear_rx_dr()`](radio/struct.Nrf24l01.html#method.clear_rx_dr)
//! - [`Nrf24l01::flush_rx()`](radio/struct.Nrf24l01.html#method.flush_rx)
//! - [`Nrf24l01::flush_tx()`](radio/struct.Nrf24l01.html#method.flush_tx)
//! - [`Nrf24l01::power_up()`](radio/struct.Nrf24l01.html#method.power_up)
//! - [`Nrf24l01::power_down()`](radio/struct.Nrf24l01.html#method.power_down)
//! - [`Nrf24l01::is_powered()`](radio/struct.Nrf24l01.html#method.is_powered)
//!
//! ## Register API
//!
//! - [`Nrf24l01::read_register()`](fn@crate::radio::Nrf24l01::read_register)
//! - [`Nrf24l01::write_register()`](fn@crate::radio::Nrf24l01::write_register)
//! - [`Nrf24l01::read_rx_fifo()`](fn@crate::radio::Nrf24l01::read_rx_fifo)
//! - [`Nrf24l01::write_tx_fifo()`](fn@crate::radio::Nrf24l01::write_tx_fifo)
//!
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod types;
pub use types::{
    CrcLength, DataRate, FifoState, FifoStatus, PaLevel, StatusFlags, TransceiverMode, TxOutcome,
};
pub mod radio;
