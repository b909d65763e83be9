//! This module defines the types used to configure and inspect the radio.
//! These types are plain values and never touch the hardware.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier output level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represent the attenuation from the chip's maximum output.
///
/// | variant | RF_SETUP\[2:1\] |
/// |:-------:|:---------------:|
/// | [`PaLevel::Dbm0`] | `3` |
/// | [`PaLevel::DbmNeg6`] | `2` |
/// | [`PaLevel::DbmNeg12`] | `1` |
/// | [`PaLevel::DbmNeg18`] | `0` |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaLevel {
    /// 0 dBm, the highest output power.
    Dbm0,
    /// -6 dBm
    DbmNeg6,
    /// -12 dBm
    DbmNeg12,
    /// -18 dBm, the lowest output power.
    DbmNeg18,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Dbm0 => defmt::write!(fmt, "0 dBm"),
            PaLevel::DbmNeg6 => defmt::write!(fmt, "-6 dBm"),
            PaLevel::DbmNeg12 => defmt::write!(fmt, "-12 dBm"),
            PaLevel::DbmNeg18 => defmt::write!(fmt, "-18 dBm"),
        }
    }
}

impl PaLevel {
    pub(crate) const MASK: u8 = 0b110;

    /// The value as positioned in the RF_SETUP register.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Dbm0 => 3 << 1,
            PaLevel::DbmNeg6 => 2 << 1,
            PaLevel::DbmNeg12 => 1 << 1,
            PaLevel::DbmNeg18 => 0,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Dbm0 => write!(f, "0 dBm"),
            PaLevel::DbmNeg6 => write!(f, "-6 dBm"),
            PaLevel::DbmNeg12 => write!(f, "-12 dBm"),
            PaLevel::DbmNeg18 => write!(f, "-18 dBm"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 250 Kbps
    Kbps250,
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
}

impl DataRate {
    /// RF_DR_LOW (bit 5) and RF_DR_HIGH (bit 3).
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Kbps250 => 0x20,
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Kbps250 => write!(f, "250 Kbps"),
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
        }
    }
}

/// The length of the CRC checksum appended to every packet.
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
/// The auto-ack feature requires a CRC, so this driver never disables it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcLength {
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// The CRCO bit of the CONFIG register.
    pub(crate) const MASK: u8 = 1 << 2;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Bit8 => 0,
            CrcLength::Bit16 => Self::MASK,
        }
    }

    /// The checksum length in bytes.
    pub const fn bytes(self) -> u8 {
        match self {
            CrcLength::Bit8 => 1,
            CrcLength::Bit16 => 2,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The role the radio takes once configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransceiverMode {
    /// Primary transmitter (PRIM_RX = 0).
    Tx,
    /// Primary receiver (PRIM_RX = 1).
    Rx,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TransceiverMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TransceiverMode::Tx => defmt::write!(fmt, "TX"),
            TransceiverMode::Rx => defmt::write!(fmt, "RX"),
        }
    }
}

impl Display for TransceiverMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TransceiverMode::Tx => write!(f, "TX"),
            TransceiverMode::Rx => write!(f, "RX"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// How a polled transmission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxOutcome {
    /// The payload was sent (and acknowledged, if auto-ack is active).
    Delivered,
    /// The auto-retransmit count was exhausted without an acknowledgement.
    MaxRetries,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TxOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TxOutcome::Delivered => defmt::write!(fmt, "Delivered"),
            TxOutcome::MaxRetries => defmt::write!(fmt, "MaxRetries"),
        }
    }
}

/// A snapshot of the STATUS register.
///
/// The radio clocks this byte out during every command byte, so the
/// driver refreshes its copy on each SPI command.
/// ```
/// use nrf24l01::StatusFlags;
///
/// let flags = StatusFlags::from_bits(0x2E);
/// assert!(flags.tx_ds());
/// assert!(!flags.max_rt());
/// ```
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _reserved: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO (7 when empty).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags (RX_DR, TX_DS, MAX_RT).
    pub(crate) const IRQ_MASK: u8 = 0x70;
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

/// A snapshot of the FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct FifoStatus {
    #[bits(1)]
    _reserved_msb: u8,

    /// The last transmitted payload is being reused (REUSE_TX_PL).
    #[bits(1, access = RO)]
    pub tx_reuse: bool,

    /// The TX FIFO has no free slot.
    #[bits(1, access = RO)]
    pub tx_full: bool,

    /// The TX FIFO holds no payload.
    #[bits(1, access = RO)]
    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    /// The RX FIFO has no free slot.
    #[bits(1, access = RO)]
    pub rx_full: bool,

    /// The RX FIFO holds no payload.
    #[bits(1, access = RO)]
    pub rx_empty: bool,
}

impl FifoStatus {
    /// Summarize the TX FIFO flags.
    pub const fn tx_state(&self) -> FifoState {
        fifo_state(self.tx_full(), self.tx_empty())
    }

    /// Summarize the RX FIFO flags.
    pub const fn rx_state(&self) -> FifoState {
        fifo_state(self.rx_full(), self.rx_empty())
    }
}

const fn fifo_state(full: bool, empty: bool) -> FifoState {
    if full {
        FifoState::Full
    } else if empty {
        FifoState::Empty
    } else {
        FifoState::Occupied
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FifoStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "FifoStatus tx: {}, rx: {}, tx_reuse: {}",
            self.tx_state(),
            self.rx_state(),
            self.tx_reuse()
        )
    }
}

#[cfg(test)]
mod test {
    use super::{
        CrcLength, DataRate, FifoState, FifoStatus, PaLevel, StatusFlags, TransceiverMode,
    };
    extern crate std;
    use std::{format, string::String};

    #[test]
    fn pa_level_bits() {
        // highest power is the highest register value
        for (level, bits) in [
            (PaLevel::Dbm0, 3u8),
            (PaLevel::DbmNeg6, 2),
            (PaLevel::DbmNeg12, 1),
            (PaLevel::DbmNeg18, 0),
        ] {
            assert_eq!(level.into_bits() >> 1, bits);
            assert_eq!(level.into_bits() & !PaLevel::MASK, 0);
        }
    }

    #[test]
    fn data_rate_bits() {
        assert_eq!(DataRate::Kbps250.into_bits(), 1 << 5);
        assert_eq!(DataRate::Mbps1.into_bits(), 0);
        assert_eq!(DataRate::Mbps2.into_bits(), 1 << 3);
        for rate in [DataRate::Kbps250, DataRate::Mbps1, DataRate::Mbps2] {
            assert_eq!(rate.into_bits() & !DataRate::MASK, 0);
        }
    }

    #[test]
    fn crc_bits() {
        assert_eq!(CrcLength::Bit8.into_bits(), 0);
        assert_eq!(CrcLength::Bit16.into_bits(), 4);
        assert_eq!(CrcLength::Bit16.into_bits(), CrcLength::MASK);
        assert_eq!(CrcLength::Bit8.bytes(), 1);
        assert_eq!(CrcLength::Bit16.bytes(), 2);
    }

    #[test]
    fn display_enums() {
        assert_eq!(format!("{}", PaLevel::DbmNeg12), String::from("-12 dBm"));
        assert_eq!(format!("{}", DataRate::Kbps250), String::from("250 Kbps"));
        assert_eq!(format!("{}", CrcLength::Bit16), String::from("16 bit"));
        assert_eq!(format!("{}", TransceiverMode::Rx), String::from("RX"));
        assert_eq!(format!("{}", FifoState::Occupied), String::from("Occupied"));
    }

    #[test]
    fn display_flags() {
        assert_eq!(
            format!("{}", StatusFlags::from_bits(0x5E)),
            String::from("StatusFlags rx_dr: true, tx_ds: false, max_rt: true")
        );
    }

    #[test]
    fn status_fields() {
        let flags = StatusFlags::from_bits(0x61);
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(!flags.max_rt());
        assert_eq!(flags.rx_pipe(), 0);
        assert!(flags.tx_full());
        assert_eq!(StatusFlags::from_bits(0x0E).rx_pipe(), 7);
    }

    #[test]
    fn fifo_status_fields() {
        let status = FifoStatus::from_bits(0x11);
        assert!(status.tx_empty());
        assert!(status.rx_empty());
        assert!(!status.tx_full());
        assert!(!status.rx_full());
        assert!(!status.tx_reuse());
        assert_eq!(status.tx_state(), FifoState::Empty);
        assert_eq!(status.rx_state(), FifoState::Empty);

        let status = FifoStatus::from_bits(0x62);
        assert!(status.tx_reuse());
        assert_eq!(status.tx_state(), FifoState::Full);
        assert_eq!(status.rx_state(), FifoState::Full);

        // reserved bits are ignored
        let status = FifoStatus::from_bits(0x8C);
        assert_eq!(status.tx_state(), FifoState::Occupied);
        assert_eq!(status.rx_state(), FifoState::Occupied);
    }
}
