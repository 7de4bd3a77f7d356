//! SSD1309 command bytes
//!
//! Multi-byte commands are sent as consecutive command transactions: the
//! opcode first, then its argument(s), each behind its own `0x00` control
//! byte.

// Fundamental commands
pub const SET_CONTRAST: u8 = 0x81;
pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;
pub const SET_NORMAL: u8 = 0xA6;
pub const SET_INVERSE: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing
pub const SET_LOW_COLUMN: u8 = 0x00;
pub const SET_HIGH_COLUMN: u8 = 0x10;
pub const SET_MEMORY_MODE: u8 = 0x20;
pub const SET_PAGE_START: u8 = 0xB0;

// Hardware configuration
pub const SET_START_LINE: u8 = 0x40;
pub const SET_SEG_REMAP: u8 = 0xA0;
pub const SET_MUX_RATIO: u8 = 0xA8;
pub const SET_COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme
pub const SET_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOMH_DESELECT: u8 = 0xDB;
pub const SET_CHARGE_PUMP: u8 = 0x8D;

// Scrolling
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Memory addressing mode argument: horizontal
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Power-up configuration, in the order the controller needs it
///
/// The charge pump must be enabled before the panel is switched on and the
/// addressing mode must be set before the first data byte.
pub const INIT_SEQUENCE: [u8; 26] = [
    DISPLAY_OFF,
    SET_CLOCK_DIV,
    0x80, // Default divide ratio, mid oscillator frequency
    SET_MUX_RATIO,
    0x3F, // 64 lines
    SET_DISPLAY_OFFSET,
    0x00,
    SET_START_LINE, // Line 0
    SET_CHARGE_PUMP,
    0x14, // Enable
    SET_MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL,
    SET_SEG_REMAP | 0x01, // Column 127 mapped to SEG0
    SET_COM_SCAN_DEC,
    SET_COM_PINS,
    0x12, // Alternative COM pin configuration
    SET_CONTRAST,
    0xCF,
    SET_PRECHARGE,
    0xF1,
    SET_VCOMH_DESELECT,
    0x40,
    DEACTIVATE_SCROLL,
    ENTIRE_DISPLAY_RESUME, // Follow RAM content
    SET_NORMAL,
    DISPLAY_ON,
];

/// Page start address command for page 0..=7
pub const fn page_start(page: u8) -> u8 {
    SET_PAGE_START + page
}

/// Lower column nibble command
pub const fn low_column(column: u8) -> u8 {
    SET_LOW_COLUMN + (column & 0x0F)
}

/// Upper column nibble command
pub const fn high_column(column: u8) -> u8 {
    SET_HIGH_COLUMN + ((column >> 4) & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_brackets() {
        assert_eq!(INIT_SEQUENCE.first(), Some(&DISPLAY_OFF));
        assert_eq!(INIT_SEQUENCE.last(), Some(&DISPLAY_ON));
    }

    #[test]
    fn test_charge_pump_before_display_on() {
        let pump = INIT_SEQUENCE.iter().position(|&c| c == SET_CHARGE_PUMP).unwrap();
        let on = INIT_SEQUENCE.iter().rposition(|&c| c == DISPLAY_ON).unwrap();
        assert!(pump < on);
        assert_eq!(INIT_SEQUENCE[pump + 1], 0x14);
    }

    #[test]
    fn test_column_nibbles() {
        assert_eq!(low_column(58), 0x0A);
        assert_eq!(high_column(58), 0x13);
        assert_eq!(low_column(127), 0x0F);
        assert_eq!(high_column(127), 0x17);
        assert_eq!(page_start(7), 0xB7);
    }
}
