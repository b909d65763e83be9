use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::RadioPower, Nrf24Error, Nrf24l01};

use super::{bit_fields::Config, constants::timing, registers};

impl<SPI, CSN, CE, DELAY> RadioPower for Nrf24l01<SPI, CSN, CE, DELAY>
where
    SPI: SpiBus,
    CSN: OutputPin,
    CE: OutputPin<Error = CSN::Error>,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, CSN::Error>;

    /// The radio needs up to 1.5 ms (Tpd2stby) to reach standby mode after
    /// leaving power down. This function blocks for that long.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ensure_configured()?;
        self.set_power(true)?;
        self._delay_impl.delay_us(timing::POWER_UP_US);
        Ok(())
    }

    /// In power down mode the radio draws about 900 nA.
    /// The CE pin is left as is.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ensure_configured()?;
        self.set_power(false)
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        self.ensure_configured()?;
        Ok(Config::from_bits(self.read_register(registers::CONFIG)?).power())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, RadioPower};
    use crate::{
        radio::{Nrf24Error, RadioConfig},
        test::{mk_radio, mk_sim_radio, Frame},
    };

    #[test]
    pub fn power_up() {
        let frames = [
            Frame::read_reg(registers::CONFIG, 0x0D),
            Frame::write_reg(registers::CONFIG, 0x0F),
        ];
        let mut mocks = mk_radio(&[], &frames);
        mocks.0.assume_configured(RadioConfig::default());
        mocks.0.power_up().unwrap();
        mocks.done();
    }

    #[test]
    pub fn power_down() {
        let frames = [
            Frame::read_reg(registers::CONFIG, 0x7F),
            Frame::write_reg(registers::CONFIG, 0x7D),
            Frame::read_reg(registers::CONFIG, 0x7D),
        ];
        // no CE expectations: CE stays untouched
        let mut mocks = mk_radio(&[], &frames);
        mocks.0.assume_configured(RadioConfig::default());
        mocks.0.power_down().unwrap();
        assert_eq!(mocks.0.is_powered(), Ok(false));
        mocks.done();
    }

    #[test]
    pub fn unconfigured() {
        let mut mocks = mk_radio(&[], &[]);
        assert_eq!(mocks.0.power_up(), Err(Nrf24Error::Unconfigured));
        assert_eq!(mocks.0.power_down(), Err(Nrf24Error::Unconfigured));
        assert_eq!(mocks.0.is_powered(), Err(Nrf24Error::Unconfigured));
        mocks.done();
    }

    #[test]
    pub fn registers_survive_power_down() {
        let (mut radio, chip) = mk_sim_radio();
        radio.assume_configured(RadioConfig::default());
        radio.write_register(registers::RF_CH, 99).unwrap();
        radio.power_up().unwrap();
        assert_eq!(radio.is_powered(), Ok(true));
        radio.power_down().unwrap();
        assert_eq!(radio.is_powered(), Ok(false));
        // SPI still answers and registers are kept
        assert_eq!(radio.read_register(registers::RF_CH), Ok(99));
        assert_eq!(chip.borrow().regs[registers::CONFIG as usize] & 0xFD, 0x08);
    }
}
