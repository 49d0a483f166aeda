use core::fmt;
use volatile::Volatile;
use spin::Mutex;
use lazy_static::lazy_static;
use crate::constants::vga::{
    BUFFER_ADDR, BUFFER_HEIGHT, BUFFER_WIDTH, COMMAND_PORT, CURSOR_LOCATION_HIGH,
    CURSOR_LOCATION_LOW, DATA_PORT,
};
use crate::hal::{PcPorts, PortIo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Attribute byte: low nibble foreground, high nibble background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }
}

/// One cell of the text grid: character code plus attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

/// Cell-level access to an 80x25 text grid.
///
/// `row` and `col` must be in range; the writer keeps them so by
/// construction, and implementations assert it in debug builds.
pub trait VideoMemory {
    fn read(&self, row: usize, col: usize) -> ScreenChar;
    fn write(&mut self, row: usize, col: usize, value: ScreenChar);
}

impl<T: VideoMemory + ?Sized> VideoMemory for &mut T {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        (**self).read(row, col)
    }

    fn write(&mut self, row: usize, col: usize, value: ScreenChar) {
        (**self).write(row, col, value)
    }
}

#[repr(transparent)]
struct Buffer {
    chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

/// [`VideoMemory`] backed by the memory-mapped VGA text buffer.
///
/// Every access is a volatile read or write; the hardware refresh picks
/// cell changes up directly, with no double buffering.
pub struct VgaText {
    buffer: &'static mut Buffer,
}

impl VgaText {
    /// Binds the text buffer mapped at `addr` (normally
    /// [`BUFFER_ADDR`](crate::constants::vga::BUFFER_ADDR)).
    ///
    /// # Safety
    ///
    /// `addr` must point to the mapped VGA text buffer, and at most one
    /// `VgaText` may be alive for it at a time.
    pub unsafe fn new(addr: usize) -> VgaText {
        VgaText {
            buffer: unsafe { &mut *(addr as *mut Buffer) },
        }
    }
}

impl VideoMemory for VgaText {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        debug_assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        self.buffer.chars[row][col].read()
    }

    fn write(&mut self, row: usize, col: usize, value: ScreenChar) {
        debug_assert!(row < BUFFER_HEIGHT && col < BUFFER_WIDTH);
        self.buffer.chars[row][col].write(value);
    }
}

/// The display surface: a cursor over a cell grid, with line wrap,
/// scroll-on-overflow and newline/carriage-return handling.
pub struct Writer<V: VideoMemory, P: PortIo> {
    row_position: usize,
    column_position: usize,
    color_code: ColorCode,
    buffer: V,
    ports: P,
}

impl<V: VideoMemory, P: PortIo> Writer<V, P> {
    /// Starts at (0, 0) with light gray on black. The grid contents are
    /// left untouched; call [`clear_screen`](Writer::clear_screen) first
    /// if a blank screen is wanted.
    pub fn new(buffer: V, ports: P) -> Writer<V, P> {
        Writer {
            row_position: 0,
            column_position: 0,
            color_code: ColorCode::new(Color::LightGray, Color::Black),
            buffer,
            ports,
        }
    }

    pub fn write_byte(&mut self, byte: u8) {
        match byte {
            // Escape characters move the logical cursor only; the
            // hardware cursor register is not reprogrammed (except by a
            // scroll they trigger).
            b'\n' => {
                self.column_position = 0;
                self.row_position += 1;
                if self.row_position >= BUFFER_HEIGHT {
                    self.scroll();
                }
            }
            b'\r' => {
                self.column_position = 0;
            }
            byte => {
                self.buffer.write(
                    self.row_position,
                    self.column_position,
                    ScreenChar {
                        ascii_character: byte,
                        color_code: self.color_code,
                    },
                );
                self.column_position += 1;

                if self.column_position >= BUFFER_WIDTH {
                    self.column_position = 0;
                    self.row_position += 1;
                    if self.row_position >= BUFFER_HEIGHT {
                        self.scroll();
                    }
                }

                self.sync_cursor();
            }
        }
    }

    pub fn write_string(&mut self, s: &str) {
        for byte in s.bytes() {
            match byte {
                // printable ASCII, newline or carriage return
                0x20..=0x7e | b'\n' | b'\r' => self.write_byte(byte),
                _ => self.write_byte(0xfe),
            }
        }
    }

    /// Moves every line up by one, blanks the bottom line and parks the
    /// cursor row there. The top line is discarded; the column is left
    /// where it was.
    pub fn scroll(&mut self) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                let character = self.buffer.read(row, col);
                self.buffer.write(row - 1, col, character);
            }
        }
        self.clear_row(BUFFER_HEIGHT - 1);
        self.row_position = BUFFER_HEIGHT - 1;
        self.sync_cursor();
    }

    /// Blanks the whole grid at the current attribute. The cursor stays
    /// where it is.
    pub fn clear_screen(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
    }

    /// Changes the attribute used by subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color_code = ColorCode::new(foreground, background);
    }

    /// Current logical cursor as (row, column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row_position, self.column_position)
    }

    fn clear_row(&mut self, row: usize) {
        let blank = ScreenChar {
            ascii_character: b' ',
            color_code: self.color_code,
        };
        for col in 0..BUFFER_WIDTH {
            self.buffer.write(row, col, blank);
        }
    }

    /// Programs the CRTC cursor location registers with the linear cell
    /// index, high byte first.
    fn sync_cursor(&mut self) {
        let index = (self.row_position * BUFFER_WIDTH + self.column_position) as u16;

        self.ports.write(COMMAND_PORT, CURSOR_LOCATION_HIGH);
        self.ports.write(DATA_PORT, (index >> 8) as u8);

        self.ports.write(COMMAND_PORT, CURSOR_LOCATION_LOW);
        self.ports.write(DATA_PORT, index as u8);
    }
}

lazy_static! {
    /// Console bound to the hardware buffer and ports.
    pub static ref WRITER: Mutex<Writer<VgaText, PcPorts>> = Mutex::new(Writer::new(
        unsafe { VgaText::new(BUFFER_ADDR) },
        PcPorts,
    ));
}

impl<V: VideoMemory, P: PortIo> fmt::Write for Writer<V, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s);
        Ok(())
    }
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::vga_buffer::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

#[doc(hidden)]
pub fn _print(args: core::fmt::Arguments) {
    use core::fmt::Write;
    WRITER.lock().write_fmt(args).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_code_packs_nibbles() {
        assert_eq!(ColorCode::new(Color::LightGray, Color::Black), ColorCode(0x07));
        assert_eq!(ColorCode::new(Color::White, Color::Blue), ColorCode(0x1f));
        assert_eq!(ColorCode::new(Color::Black, Color::White), ColorCode(0xf0));
    }

    #[test]
    fn screen_char_is_one_cell_wide() {
        // the hardware cell is exactly two bytes: character then attribute
        assert_eq!(core::mem::size_of::<ScreenChar>(), 2);
        assert_eq!(core::mem::size_of::<[ScreenChar; BUFFER_WIDTH]>(), 160);
    }
}
