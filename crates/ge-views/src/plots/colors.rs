//! Series color palette

use egui::Color32;

/// Fixed palette shared by every chart mode; order-significant.
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x3b, 0x82, 0xf6), // blue
    Color32::from_rgb(0xef, 0x44, 0x44), // red
    Color32::from_rgb(0x10, 0xb9, 0x81), // green
    Color32::from_rgb(0xf5, 0x9e, 0x0b), // amber
    Color32::from_rgb(0x8b, 0x5c, 0xf6), // violet
    Color32::from_rgb(0xec, 0x48, 0x99), // pink
];

/// Color assigned to the series (or pie slice) at `index`, cycling when
/// there are more series than palette entries.
pub fn series_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(series_color(0), PALETTE[0]);
        assert_eq!(series_color(5), PALETTE[5]);
        assert_eq!(series_color(6), PALETTE[0]);
        assert_eq!(series_color(13), PALETTE[1]);
    }
}
