use core::fmt;
use core::hint::spin_loop;

use crate::constants::keyboard::{
    CMD_ECHO, CMD_ENABLE_SCANNING, DATA_PORT, ECHO_REPLY, EXTENDED2_PREFIX, EXTENDED_PREFIX,
    STATUS_COMMAND_PORT, STATUS_INPUT_BUFFER_FULL, STATUS_OUTPUT_BUFFER_FULL,
};
use crate::hal::PortIo;

/// Iteration cap for controller handshakes during init. Steady-state
/// scancode waits are unbounded; only command traffic gets a deadline.
const MAX_COMMAND_POLLS: usize = 10_000;

/// A complete scancode, reassembled from one, two or three raw bytes.
///
/// Single-byte codes keep their raw value. Two-byte `0xE0` sequences
/// become `0xE000 | code`, and three-byte `0xE1` sequences become
/// `0xE10000 | first << 8 | second`, so every sequence maps to a
/// distinct value and prefix bytes never surface on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scancode(pub u32);

impl Scancode {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// True for codes that arrived through an `0xE0` or `0xE1` prefix.
    pub fn is_extended(self) -> bool {
        self.0 > 0xFF
    }
}

/// Where the decoder stands between bytes. At most one sequence is
/// ever pending, so the first payload byte of a three-byte sequence
/// lives in the variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Idle,
    /// `0xE0` seen; the next byte completes the code.
    Extended,
    /// `0xE1` seen; two payload bytes follow.
    Extended2,
    /// `0xE1` and its first payload byte seen.
    Extended2Final(u8),
}

/// Reassembles multi-byte scancode sequences one raw byte at a time.
///
/// Pending state is checked before prefix recognition, so a prefix
/// byte in payload position counts as payload: `E0 E0` completes as
/// `0xE0E0` rather than restarting the sequence.
pub struct ScancodeDecoder {
    state: DecodeState,
}

impl ScancodeDecoder {
    pub const fn new() -> ScancodeDecoder {
        ScancodeDecoder {
            state: DecodeState::Idle,
        }
    }

    /// Feeds one raw byte and returns the completed code, if any.
    ///
    /// Prefix bytes and sequence middles return `None` and leave the
    /// decoder waiting for the rest, no matter how many polls pass
    /// before it shows up.
    pub fn add_byte(&mut self, byte: u8) -> Option<Scancode> {
        match self.state {
            DecodeState::Extended => {
                self.state = DecodeState::Idle;
                Some(Scancode(0xE000 | u32::from(byte)))
            }
            DecodeState::Extended2 => {
                self.state = DecodeState::Extended2Final(byte);
                None
            }
            DecodeState::Extended2Final(first) => {
                self.state = DecodeState::Idle;
                Some(Scancode(0xE1_0000 | (u32::from(first) << 8) | u32::from(byte)))
            }
            DecodeState::Idle => match byte {
                EXTENDED_PREFIX => {
                    self.state = DecodeState::Extended;
                    None
                }
                EXTENDED2_PREFIX => {
                    self.state = DecodeState::Extended2;
                    None
                }
                code => Some(Scancode(u32::from(code))),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardError {
    /// The controller never drained its input buffer for a command.
    CommandTimeout,
    /// The echo self-test reply was wrong or never came.
    SelfTestFailed,
}

impl KeyboardError {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyboardError::CommandTimeout => "keyboard controller not accepting commands",
            KeyboardError::SelfTestFailed => "keyboard echo self-test failed",
        }
    }
}

impl fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Result<T> = core::result::Result<T, KeyboardError>;

/// Polling driver for a PS/2 keyboard behind an i8042-style controller.
///
/// Owns its decoder, so sequence state survives across polls without
/// any shared statics. All controller traffic goes through the port
/// seam, which is what the tests substitute.
pub struct Keyboard<P: PortIo> {
    ports: P,
    decoder: ScancodeDecoder,
}

impl<P: PortIo> Keyboard<P> {
    pub fn new(ports: P) -> Keyboard<P> {
        Keyboard {
            ports,
            decoder: ScancodeDecoder::new(),
        }
    }

    /// Brings the device to a known state: drains stale output, enables
    /// scanning, drains the acknowledge bytes, then echoes and verifies
    /// the reply.
    pub fn init(&mut self) -> Result<()> {
        self.drain();
        self.send_device_command(CMD_ENABLE_SCANNING)?;
        self.drain();

        self.send_device_command(CMD_ECHO)?;
        match self.wait_reply() {
            Some(ECHO_REPLY) => Ok(()),
            _ => Err(KeyboardError::SelfTestFailed),
        }
    }

    /// One poll of the controller. Returns a code only when a byte was
    /// waiting and it completed a sequence; `None` covers both an empty
    /// output buffer and a sequence still in flight.
    pub fn poll_scancode(&mut self) -> Option<Scancode> {
        if self.output_full() {
            let byte = self.ports.read(DATA_PORT);
            self.decoder.add_byte(byte)
        } else {
            None
        }
    }

    /// Spins until a complete scancode arrives.
    pub fn wait_scancode(&mut self) -> Scancode {
        loop {
            if let Some(code) = self.poll_scancode() {
                return code;
            }
            spin_loop();
        }
    }

    fn output_full(&mut self) -> bool {
        self.ports.read(STATUS_COMMAND_PORT) & STATUS_OUTPUT_BUFFER_FULL != 0
    }

    /// Reads and discards whatever sits in the output buffer. Stops at
    /// the handshake deadline; a status bit that never clears then
    /// surfaces as `CommandTimeout` through the next command wait.
    fn drain(&mut self) {
        for _ in 0..MAX_COMMAND_POLLS {
            if !self.output_full() {
                return;
            }
            let _ = self.ports.read(DATA_PORT);
        }
    }

    /// Writes a device command once the controller input buffer empties.
    fn send_device_command(&mut self, command: u8) -> Result<()> {
        for _ in 0..MAX_COMMAND_POLLS {
            if self.ports.read(STATUS_COMMAND_PORT) & STATUS_INPUT_BUFFER_FULL == 0 {
                self.ports.write(DATA_PORT, command);
                return Ok(());
            }
            spin_loop();
        }
        Err(KeyboardError::CommandTimeout)
    }

    /// Bounded wait for the reply byte to a command.
    fn wait_reply(&mut self) -> Option<u8> {
        for _ in 0..MAX_COMMAND_POLLS {
            if self.output_full() {
                return Some(self.ports.read(DATA_PORT));
            }
            spin_loop();
        }
        None
    }
}
