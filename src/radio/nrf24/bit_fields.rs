//! Register layouts and the pure read-modify-write transforms applied to them.
//!
//! Nothing here touches the bus: each transform takes the byte read from the
//! radio and returns the byte to write back.

use bitfield_struct::bitfield;

use crate::{CrcLength, DataRate, PaLevel, TransceiverMode};

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Hide the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Hide the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Hide the "max retransmits reached" event from the IRQ pin.
    pub mask_max_rt: bool,

    #[bits(1, default = true)]
    pub crc_enable: bool,

    #[bits(1, access = None)]
    crc_length: u8,

    pub power: bool,

    #[bits(1, access = None)]
    is_rx: bool,
}

impl Config {
    pub const fn with_crc_length(self, length: CrcLength) -> Self {
        Self::from_bits(self.into_bits() & !CrcLength::MASK | length.into_bits())
    }

    pub const fn with_mode(self, mode: TransceiverMode) -> Self {
        let new_val = self.into_bits() & !1;
        match mode {
            TransceiverMode::Rx => Self::from_bits(new_val | 1),
            TransceiverMode::Tx => Self::from_bits(new_val),
        }
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retransmit delay in steps of 250 us (0 means 250 us).
    #[bits(4)]
    pub ard: u8,

    /// The auto-retransmit count.
    #[bits(4, default = 3)]
    pub arc: u8,
}

impl SetupRetry {
    pub const MAX_COUNT: u8 = 15;
    pub const MIN_DELAY_US: u16 = 250;
    pub const MAX_DELAY_US: u16 = 4000;

    /// Replace the low nibble. The previous count is cleared first.
    pub fn with_retry_count(self, count: u8) -> Self {
        self.with_arc(count.min(Self::MAX_COUNT))
    }

    /// Replace the high nibble. The previous delay is cleared first.
    pub fn with_retry_delay_us(self, delay_us: u16) -> Self {
        self.with_ard(delay_us_to_ard(delay_us))
    }
}

/// Convert a delay in microseconds to the SETUP_RETR ARD nibble.
pub(crate) const fn delay_us_to_ard(delay_us: u16) -> u8 {
    let clamped = if delay_us < SetupRetry::MIN_DELAY_US {
        SetupRetry::MIN_DELAY_US
    } else if delay_us > SetupRetry::MAX_DELAY_US {
        SetupRetry::MAX_DELAY_US
    } else {
        delay_us
    };
    (clamped / 250 - 1) as u8
}

#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _padding: u8,

    #[bits(1, access = None)]
    rf_dr_low: bool,

    pub pll_lock: bool,

    #[bits(1, access = None)]
    rf_dr_high: bool,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    #[bits(1, default = true)]
    pub lna_enable: bool,
}

impl RfSetup {
    /// Both rate bits are cleared before the new rate is applied.
    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self::from_bits(self.into_bits() & !DataRate::MASK | data_rate.into_bits())
    }

    pub const fn with_pa_level(self, level: PaLevel) -> Self {
        Self::from_bits(self.into_bits() & !PaLevel::MASK | level.into_bits())
    }
}

/// The SETUP_AW register value for an address `width` of 3, 4 or 5 bytes.
pub(crate) const fn address_width_bits(width: u8) -> u8 {
    let clamped = if width < 3 {
        3
    } else if width > 5 {
        5
    } else {
        width
    };
    clamped - 2
}
