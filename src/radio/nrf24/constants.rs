/// Register offsets for the nRF24L01, as used with
/// [`Nrf24l01::read_register()`](fn@crate::radio::Nrf24l01::read_register).
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;

    /// Register indices are 5 bits wide in the command byte.
    pub const ADDRESS_MASK: u8 = 0x1F;
}

/// SPI command opcodes for the nRF24L01.
///
/// Register commands carry the register offset in their low 5 bits.
/// ```
/// use nrf24l01::radio::{commands, registers};
///
/// assert_eq!(commands::W_REGISTER | registers::RF_CH, 0x25);
/// ```
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// IRQ flag bits shared by the STATUS and CONFIG registers.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;
}

/// Register values written by the configuration sequence before any
/// user setting is applied.
pub mod defaults {
    /// CRC enabled (1 byte), powered down, PTX, all IRQ sources unmasked.
    pub const CONFIG: u8 = 0x08;
    /// Auto-ack on pipes 0 - 5.
    pub const EN_AA: u8 = 0x3F;
    /// RX pipes 0 and 1 enabled.
    pub const EN_RXADDR: u8 = 0x03;
    /// 5 byte addresses.
    pub const SETUP_AW: u8 = 0x03;
    /// 250 us retransmit delay, 3 retransmits.
    pub const SETUP_RETR: u8 = 0x03;
    pub const RF_CH: u8 = 0x02;
    /// 1 Mbps, 0 dBm, LNA gain on.
    pub const RF_SETUP: u8 = 0x07;
    /// Writing 1s clears RX_DR, TX_DS and MAX_RT.
    pub const STATUS: u8 = 0x70;
}

/// Timing requirements from the datasheet (in microseconds).
pub mod timing {
    /// Power down to standby (Tpd2stby) with an external crystal.
    pub const POWER_UP_US: u32 = 1500;
    /// Interval between samples of the IRQ pin while polling.
    pub const IRQ_POLL_US: u32 = 1000;
}
