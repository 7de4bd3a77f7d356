//! Transaction layer
//!
//! The controller distinguishes configuration bytes from display RAM bytes
//! by a control byte sent in front of every payload byte:
//! - `0x00`: the next byte is a command
//! - `0x40`: the next byte is written to display RAM at the current pointer
//!
//! [`Transact`] is the seam between this wire format and the drawing API.
//! [`I2cInterface`] implements it on top of an [`I2cBus`]; tests implement
//! it with a recorder.

use oled1309_hal::I2cBus;

use crate::address::DeviceAddress;

/// Control byte announcing a command byte
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte announcing a display RAM byte
pub const CONTROL_DATA: u8 = 0x40;

/// One framed controller transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transaction {
    /// Configuration or addressing byte
    Command(u8),
    /// Display RAM byte, written at the controller's current pointer
    Data(u8),
}

impl Transaction {
    /// Control byte that precedes the payload on the wire
    pub const fn control_byte(self) -> u8 {
        match self {
            Transaction::Command(_) => CONTROL_COMMAND,
            Transaction::Data(_) => CONTROL_DATA,
        }
    }

    /// Payload byte
    pub const fn payload(self) -> u8 {
        match self {
            Transaction::Command(b) | Transaction::Data(b) => b,
        }
    }

    /// The two bytes written to the bus for this transaction
    pub const fn frame(self) -> [u8; 2] {
        [self.control_byte(), self.payload()]
    }
}

/// Something that can deliver framed transactions to the controller
///
/// Every call is blocking and issues exactly one transaction. There is no
/// retry: a failed transaction is reported once and left at that.
pub trait Transact {
    /// Transport error
    type Error;

    /// Deliver one transaction
    fn transact(&mut self, transaction: Transaction) -> Result<(), Self::Error>;

    /// Send a command byte
    fn command(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.transact(Transaction::Command(byte))
    }

    /// Send a display RAM byte
    ///
    /// The controller advances its column pointer by one after each data byte.
    fn send(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.transact(Transaction::Data(byte))
    }
}

impl<T: Transact + ?Sized> Transact for &mut T {
    type Error = T::Error;

    fn transact(&mut self, transaction: Transaction) -> Result<(), Self::Error> {
        (**self).transact(transaction)
    }
}

/// I2C transport for one controller
///
/// Owns the bus handle and the device address; both are fixed for the
/// lifetime of the interface.
#[derive(Debug)]
pub struct I2cInterface<B> {
    bus: B,
    address: DeviceAddress,
}

impl<B: I2cBus> I2cInterface<B> {
    /// Bind a bus to a controller address
    pub const fn new(bus: B, address: DeviceAddress) -> Self {
        Self { bus, address }
    }

    /// Controller address this interface writes to
    pub const fn address(&self) -> DeviceAddress {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> Transact for I2cInterface<B> {
    type Error = B::Error;

    fn transact(&mut self, transaction: Transaction) -> Result<(), Self::Error> {
        self.bus.write(self.address.get(), &transaction.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bus that records every write, optionally rejecting them
    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        nack: bool,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Nack;

    impl I2cBus for RecordingBus {
        type Error = Nack;

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
            self.writes.push((address, data.to_vec()));
            if self.nack {
                Err(Nack)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_command_frame() {
        let mut iface = I2cInterface::new(RecordingBus::default(), DeviceAddress::PRIMARY);
        iface.command(0xAE).unwrap();

        let bus = iface.release();
        assert_eq!(bus.writes, vec![(0x3C, vec![0x00, 0xAE])]);
    }

    #[test]
    fn test_data_frame() {
        let mut iface = I2cInterface::new(RecordingBus::default(), DeviceAddress::SECONDARY);
        iface.send(0x7E).unwrap();

        let bus = iface.release();
        assert_eq!(bus.writes, vec![(0x3D, vec![0x40, 0x7E])]);
    }

    #[test]
    fn test_every_transaction_is_two_bytes() {
        let mut iface = I2cInterface::new(RecordingBus::default(), DeviceAddress::PRIMARY);
        for b in [0x00, 0x40, 0xFF] {
            iface.command(b).unwrap();
            iface.send(b).unwrap();
        }

        let bus = iface.release();
        assert_eq!(bus.writes.len(), 6);
        assert!(bus.writes.iter().all(|(_, frame)| frame.len() == 2));
    }

    #[test]
    fn test_failure_is_reported_once() {
        let bus = RecordingBus {
            nack: true,
            ..Default::default()
        };
        let mut iface = I2cInterface::new(bus, DeviceAddress::PRIMARY);
        assert_eq!(iface.command(0xAF), Err(Nack));

        // No retry on failure
        assert_eq!(iface.release().writes.len(), 1);
    }

    #[test]
    fn test_transaction_accessors() {
        assert_eq!(Transaction::Command(0xB3).frame(), [0x00, 0xB3]);
        assert_eq!(Transaction::Data(0x11).frame(), [0x40, 0x11]);
        assert_eq!(Transaction::Data(0x11).payload(), 0x11);
        assert_eq!(Transaction::Command(0x11).control_byte(), CONTROL_COMMAND);
    }
}
