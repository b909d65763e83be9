use crate::radio::nrf24::bit_fields::delay_us_to_ard;
use crate::{CrcLength, DataRate, PaLevel, TransceiverMode};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// Values outside the hardware's range are clamped, so every `RadioConfig` is valid.
/// ```
/// use nrf24l01::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    channel: u8,
    payload_length: u8,
    crc_length: CrcLength,
    address_length: u8,
    auto_retry_count: u8,
    auto_retry_delay_us: u16,
    data_rate: DataRate,
    pa_level: PaLevel,
    mode: TransceiverMode,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::payload_length()`] | `32` |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::address_length()`] | `5` |
    /// | [`RadioConfig::auto_retry_count()`] | `3` |
    /// | [`RadioConfig::auto_retry_delay_us()`] | `250` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Dbm0`] |
    /// | [`RadioConfig::mode()`] | [`TransceiverMode::Tx`] |
    fn default() -> Self {
        Self {
            channel: 76,
            payload_length: 32,
            crc_length: CrcLength::Bit16,
            address_length: 5,
            auto_retry_count: 3,
            auto_retry_delay_us: 250,
            data_rate: DataRate::Mbps1,
            pa_level: PaLevel::Dbm0,
            mode: TransceiverMode::Tx,
        }
    }
}

impl RadioConfig {
    /// The largest payload the radio's FIFOs can hold.
    pub const MAX_PAYLOAD_LENGTH: u8 = 32;
    /// The highest channel supported by the radio.
    pub const MAX_CHANNEL: u8 = 125;
    /// The base frequency (in MHz) that channels are offset from.
    pub const BASE_FREQUENCY_MHZ: u16 = 2400;

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    /// A `value` of 2400 or more is taken as a frequency in MHz and converted
    /// to the matching channel. The result is clamped to range [0, 125].
    pub fn with_channel(self, value: u16) -> Self {
        let offset = if value >= Self::BASE_FREQUENCY_MHZ {
            value - Self::BASE_FREQUENCY_MHZ
        } else {
            value
        };
        Self {
            channel: offset.min(Self::MAX_CHANNEL as u16) as u8,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_payload_length()`].
    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// The fixed length of every transmitted and received payload.
    ///
    /// This value is clamped to range [1, 32].
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value.clamp(1, Self::MAX_PAYLOAD_LENGTH),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.crc_length
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self {
            crc_length: length,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_address_length()`].
    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// The address length (in bytes).
    ///
    /// This value is clamped to range [3, 5].
    pub fn with_address_length(self, value: u8) -> Self {
        Self {
            address_length: value.clamp(3, 5),
            ..self
        }
    }

    /// The auto-retry feature's `count` (set via [`RadioConfig::with_auto_retries()`]).
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retry_count
    }

    /// The auto-retry feature's `delay` in microseconds
    /// (set via [`RadioConfig::with_auto_retries()`]).
    pub const fn auto_retry_delay_us(&self) -> u16 {
        self.auto_retry_delay_us
    }

    /// Set the auto-retry feature's `delay` (in microseconds) and `count` parameters.
    ///
    /// The `count` is clamped to range [0, 15]. The `delay_us` is clamped to range
    /// [250, 4000] and rounded down to a multiple of 250 microseconds.
    pub fn with_auto_retries(self, delay_us: u16, count: u8) -> Self {
        Self {
            auto_retry_count: count.min(15),
            auto_retry_delay_us: (delay_us_to_ard(delay_us) as u16 + 1) * 250,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// The Power Amplitude (PA) level.
    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            pa_level: level,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_mode()`].
    pub const fn mode(&self) -> TransceiverMode {
        self.mode
    }

    /// Choose between the primary transmitter and primary receiver roles.
    ///
    /// Only [`TransceiverMode::Rx`] programs the pipe 0 payload width.
    pub fn with_mode(self, mode: TransceiverMode) -> Self {
        Self { mode, ..self }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RadioConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RadioConfig {} ch: {}, len: {}, crc: {}, aw: {}, retries: {}x{}us, {}, {}",
            self.mode,
            self.channel,
            self.payload_length,
            self.crc_length,
            self.address_length,
            self.auto_retry_count,
            self.auto_retry_delay_us,
            self.data_rate,
            self.pa_level
        )
    }
}

#[cfg(test)]
mod test {
    use super::RadioConfig;
    use crate::{CrcLength, DataRate, PaLevel, TransceiverMode};

    #[test]
    fn defaults() {
        let config = RadioConfig::default();
        assert_eq!(config.channel(), 76);
        assert_eq!(config.payload_length(), 32);
        assert_eq!(config.crc_length(), CrcLength::Bit16);
        assert_eq!(config.address_length(), 5);
        assert_eq!(config.auto_retry_count(), 3);
        assert_eq!(config.auto_retry_delay_us(), 250);
        assert_eq!(config.data_rate(), DataRate::Mbps1);
        assert_eq!(config.pa_level(), PaLevel::Dbm0);
        assert_eq!(config.mode(), TransceiverMode::Tx);
    }

    #[test]
    fn channel() {
        let config = RadioConfig::default();
        assert_eq!(config.with_channel(40).channel(), 40);
        // frequencies in MHz are converted to an offset
        assert_eq!(config.with_channel(2440).channel(), 40);
        assert_eq!(config.with_channel(255).channel(), 125);
        assert_eq!(config.with_channel(2600).channel(), 125);
    }

    #[test]
    fn payload_length() {
        let config = RadioConfig::default();
        assert_eq!(config.with_payload_length(255).payload_length(), 32);
        assert_eq!(config.with_payload_length(0).payload_length(), 1);
        assert_eq!(config.with_payload_length(7).payload_length(), 7);
    }

    #[test]
    fn address_length() {
        let mut config = RadioConfig::default();
        for len in 0..10 {
            config = config.with_address_length(len);
            assert_eq!(config.address_length(), len.clamp(3, 5));
        }
    }

    #[test]
    fn auto_retries() {
        let mut config = RadioConfig::default().with_auto_retries(1500, 20);
        assert_eq!(config.auto_retry_count(), 15);
        assert_eq!(config.auto_retry_delay_us(), 1500);
        config = config.with_auto_retries(600, 0);
        assert_eq!(config.auto_retry_count(), 0);
        assert_eq!(config.auto_retry_delay_us(), 500);
        config = config.with_auto_retries(0, 4);
        assert_eq!(config.auto_retry_delay_us(), 250);
        config = config.with_auto_retries(9000, 4);
        assert_eq!(config.auto_retry_delay_us(), 4000);
    }

    #[test]
    fn enums() {
        let config = RadioConfig::default()
            .with_crc_length(CrcLength::Bit8)
            .with_data_rate(DataRate::Kbps250)
            .with_pa_level(PaLevel::DbmNeg18)
            .with_mode(TransceiverMode::Rx);
        assert_eq!(config.crc_length(), CrcLength::Bit8);
        assert_eq!(config.data_rate(), DataRate::Kbps250);
        assert_eq!(config.pa_level(), PaLevel::DbmNeg18);
        assert_eq!(config.mode(), TransceiverMode::Rx);
    }
}
