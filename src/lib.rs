//! Text-mode console and PS/2 keyboard drivers for x86 kernel bring-up.
//!
//! Two independent state machines sit behind narrow hardware seams:
//! [`vga_buffer::Writer`] drives the 80x25 text buffer and the CRTC
//! cursor, [`keyboard::Keyboard`] polls the controller and reassembles
//! multi-byte scancodes, and [`layout::ascii`] turns make codes into
//! printable bytes. The seams ([`hal::PortIo`] and
//! [`vga_buffer::VideoMemory`]) each have one real implementation and
//! let the drivers run unmodified under the host test suite.
//!
//! The canonical wiring is a polling echo loop:
//!
//! ```no_run
//! use core::fmt::Write;
//!
//! use pc_conio::hal::PcPorts;
//! use pc_conio::keyboard::Keyboard;
//! use pc_conio::vga_buffer::{VgaText, Writer};
//! use pc_conio::{constants, layout};
//!
//! let mut console = Writer::new(
//!     unsafe { VgaText::new(constants::vga::BUFFER_ADDR) },
//!     PcPorts,
//! );
//! console.clear_screen();
//!
//! for line in 0..50 {
//!     writeln!(console, "{}", line).unwrap();
//! }
//! console.write_string("That was a lot of lines.\n");
//!
//! let mut keyboard = Keyboard::new(PcPorts);
//! keyboard.init().expect("keyboard echo self-test failed");
//!
//! loop {
//!     let code = keyboard.wait_scancode();
//!     if let Some(byte) = layout::ascii(code) {
//!         console.write_byte(byte);
//!     }
//! }
//! ```
//!
//! For quick output there is also a global console behind
//! [`print!`]/[`println!`], plus a [`log`] backend in [`logger`].

#![no_std]

pub mod constants;
pub mod hal;
pub mod keyboard;
pub mod layout;
pub mod logger;
pub mod vga_buffer;

pub use hal::{PcPorts, PortIo};
pub use keyboard::{Keyboard, KeyboardError, Scancode, ScancodeDecoder};
pub use vga_buffer::{Color, ColorCode, ScreenChar, VgaText, VideoMemory, Writer, WRITER};
