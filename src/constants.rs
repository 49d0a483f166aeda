/// System-wide constants to avoid magic numbers

/// VGA text mode constants
pub mod vga {
    /// VGA text buffer physical address
    pub const BUFFER_ADDR: usize = 0xb8000;

    /// VGA text mode dimensions
    pub const BUFFER_HEIGHT: usize = 25;
    pub const BUFFER_WIDTH: usize = 80;

    /// CRTC control ports
    pub const COMMAND_PORT: u16 = 0x3D4;
    pub const DATA_PORT: u16 = 0x3D5;

    /// Cursor position registers (16-bit linear cell index, split in two)
    pub const CURSOR_LOCATION_HIGH: u8 = 0x0E;
    pub const CURSOR_LOCATION_LOW: u8 = 0x0F;
}

/// PS/2 Keyboard controller constants
pub mod keyboard {
    /// PS/2 keyboard data port
    pub const DATA_PORT: u16 = 0x60;

    /// PS/2 keyboard status/command port
    pub const STATUS_COMMAND_PORT: u16 = 0x64;

    /// Status register bit flags
    pub const STATUS_OUTPUT_BUFFER_FULL: u8 = 0x01;
    pub const STATUS_INPUT_BUFFER_FULL: u8 = 0x02;

    /// Device command: resume scancode delivery
    pub const CMD_ENABLE_SCANNING: u8 = 0xF4;

    /// Device command: echo; a live keyboard answers with the same byte
    pub const CMD_ECHO: u8 = 0xEE;
    pub const ECHO_REPLY: u8 = 0xEE;

    /// First byte of a two-byte scancode sequence
    pub const EXTENDED_PREFIX: u8 = 0xE0;

    /// First byte of a three-byte scancode sequence
    pub const EXTENDED2_PREFIX: u8 = 0xE1;
}
