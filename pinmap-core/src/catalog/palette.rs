//! Slot display colors
//!
//! Yellow, blue, green, lime, deep orange, blue grey, brown, cyan, pink,
//! teal. Slots past the end of the palette wrap around.

use rgb::RGB8;

/// Slot colors, indexed by slot position
pub const PALETTE: [RGB8; 10] = [
    RGB8 { r: 0xFF, g: 0xEB, b: 0x3B },
    RGB8 { r: 0x21, g: 0x96, b: 0xF3 },
    RGB8 { r: 0x4C, g: 0xAF, b: 0x50 },
    RGB8 { r: 0xCD, g: 0xDC, b: 0x39 },
    RGB8 { r: 0xFF, g: 0x57, b: 0x22 },
    RGB8 { r: 0x60, g: 0x7D, b: 0x8B },
    RGB8 { r: 0x79, g: 0x55, b: 0x48 },
    RGB8 { r: 0x00, g: 0xBC, b: 0xD4 },
    RGB8 { r: 0xFF, g: 0x80, b: 0xAB },
    RGB8 { r: 0x00, g: 0x96, b: 0x88 },
];

/// Get the display color for the slot at `index`
pub fn slot_color(index: usize) -> RGB8 {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot_is_yellow() {
        assert_eq!(slot_color(0), RGB8 { r: 0xFF, g: 0xEB, b: 0x3B });
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(slot_color(PALETTE.len()), slot_color(0));
        assert_eq!(slot_color(PALETTE.len() + 3), slot_color(3));
    }

    #[test]
    fn test_adjacent_slots_differ() {
        for i in 0..PALETTE.len() - 1 {
            assert_ne!(slot_color(i), slot_color(i + 1));
        }
    }
}
