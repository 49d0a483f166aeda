//! Hardware access seam.
//!
//! Driver logic in this crate never issues `in`/`out` instructions
//! directly; it goes through [`PortIo`] (and, for the display, through
//! [`crate::vga_buffer::VideoMemory`]) so the same code can run against
//! the real machine or an in-memory stand-in under test.

use x86_64::instructions::port::Port;

/// Byte-wide x86 port I/O.
pub trait PortIo {
    /// Read one byte from `port`.
    fn read(&mut self, port: u16) -> u8;

    /// Write one byte to `port`.
    fn write(&mut self, port: u16, value: u8);
}

impl<T: PortIo + ?Sized> PortIo for &mut T {
    fn read(&mut self, port: u16) -> u8 {
        (**self).read(port)
    }

    fn write(&mut self, port: u16, value: u8) {
        (**self).write(port, value)
    }
}

/// Port access through real `in`/`out` instructions.
///
/// Only meaningful in ring 0 (or with I/O privilege) on x86. Every access
/// is a side effect on shared hardware state and happens in program order.
pub struct PcPorts;

impl PortIo for PcPorts {
    fn read(&mut self, port: u16) -> u8 {
        let mut port = Port::<u8>::new(port);
        unsafe { port.read() }
    }

    fn write(&mut self, port: u16, value: u8) {
        let mut port = Port::<u8>::new(port);
        unsafe { port.write(value) }
    }
}
