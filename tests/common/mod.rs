//! Shared fakes for the driver tests: scripted I/O ports and an
//! in-memory text grid.

// each test crate pulls in only a subset of these helpers
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use pc_conio::constants::vga::{BUFFER_HEIGHT, BUFFER_WIDTH};
use pc_conio::hal::PortIo;
use pc_conio::vga_buffer::{Color, ColorCode, ScreenChar, VideoMemory};

/// [`PortIo`] stand-in. Reads come from per-port scripts and writes are
/// recorded in issue order. A port with an exhausted or missing script
/// reads as 0, which a status poll takes as "nothing pending".
pub struct FakePorts {
    reads: HashMap<u16, VecDeque<u8>>,
    pub writes: Vec<(u16, u8)>,
}

impl FakePorts {
    pub fn new() -> FakePorts {
        FakePorts {
            reads: HashMap::new(),
            writes: Vec::new(),
        }
    }

    /// Queues bytes for `port` to return, in order.
    pub fn script_reads(&mut self, port: u16, bytes: &[u8]) {
        self.reads
            .entry(port)
            .or_default()
            .extend(bytes.iter().copied());
    }

    /// Every byte written to `port`, in order.
    pub fn writes_to(&self, port: u16) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == port)
            .map(|(_, byte)| *byte)
            .collect()
    }
}

impl PortIo for FakePorts {
    fn read(&mut self, port: u16) -> u8 {
        self.reads
            .get_mut(&port)
            .and_then(|script| script.pop_front())
            .unwrap_or(0)
    }

    fn write(&mut self, port: u16, value: u8) {
        self.writes.push((port, value));
    }
}

/// [`VideoMemory`] stand-in: a plain 80x25 array, blanked to spaces.
pub struct TestVideo {
    pub cells: [[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl TestVideo {
    pub fn new() -> TestVideo {
        let blank = ScreenChar {
            ascii_character: b' ',
            color_code: ColorCode::new(Color::LightGray, Color::Black),
        };
        TestVideo {
            cells: [[blank; BUFFER_WIDTH]; BUFFER_HEIGHT],
        }
    }

    pub fn char_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col].ascii_character
    }

    /// One row as text, trailing blanks trimmed.
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.cells[row]
            .iter()
            .map(|cell| cell.ascii_character as char)
            .collect();
        text.trim_end().to_string()
    }
}

impl VideoMemory for TestVideo {
    fn read(&self, row: usize, col: usize) -> ScreenChar {
        self.cells[row][col]
    }

    fn write(&mut self, row: usize, col: usize, value: ScreenChar) {
        self.cells[row][col] = value;
    }
}
