//! Terminal presentation of swatches, palettes and toasts.

use crossterm::style::{Color, Stylize};
use vyra_color::Shade;
use vyra_types::Rgb;
use vyra_util::{EMPTY_PALETTE_MESSAGE, PaletteRenderer, Toast, ToastKind};

/// Width of a swatch block in terminal cells.
const SWATCH_WIDTH: usize = 6;

/// A truecolor block for `rgb`, or nothing when color output is disabled.
pub fn swatch(rgb: Rgb, color: bool) -> String {
    if !color {
        return String::new();
    }
    let block = " ".repeat(SWATCH_WIDTH).on(Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    });
    format!("{block} ")
}

/// One line describing a color: swatch, hex, rgb string.
pub fn color_line(hex: &str, rgb: Rgb, color: bool) -> String {
    format!("{}{hex}  {rgb}", swatch(rgb, color))
}

pub fn shade_line(shade: &Shade, color: bool) -> String {
    format!(
        "Shade {:>2}  {}",
        shade.position + 1,
        color_line(&shade.hex, shade.rgb, color)
    )
}

pub fn toast_line(toast: &Toast, color: bool) -> String {
    let (marker, tint) = match toast.kind {
        ToastKind::Success => ("✓", Color::Green),
        ToastKind::Info => ("•", Color::Cyan),
        ToastKind::Failure => ("✗", Color::Red),
    };
    if color {
        format!("{} {}", marker.with(tint), toast.message)
    } else {
        format!("{marker} {}", toast.message)
    }
}

/// Palette view that prints every saved color to stdout.
pub struct TerminalPaletteRenderer {
    pub color: bool,
}

impl TerminalPaletteRenderer {
    pub fn lines(&self, colors: &[String]) -> Vec<String> {
        if colors.is_empty() {
            return vec![EMPTY_PALETTE_MESSAGE.to_string()];
        }
        colors
            .iter()
            .enumerate()
            .map(|(index, hex)| match vyra_color::hex_to_rgb(hex) {
                Ok(rgb) => format!("{:>2}. {}", index + 1, color_line(hex, rgb, self.color)),
                Err(_) => format!("{:>2}. {hex}", index + 1),
            })
            .collect()
    }
}

impl PaletteRenderer for TerminalPaletteRenderer {
    fn render(&mut self, colors: &[String]) {
        for line in self.lines(colors) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_lines() {
        let renderer = TerminalPaletteRenderer { color: false };
        let lines = renderer.lines(&["#7B61FF".to_string(), "#000000".to_string()]);
        assert_eq!(lines, [" 1. #7B61FF  rgb(123, 97, 255)", " 2. #000000  rgb(0, 0, 0)"]);
    }

    #[test]
    fn empty_palette_shows_placeholder() {
        let renderer = TerminalPaletteRenderer { color: false };
        assert_eq!(renderer.lines(&[]), [EMPTY_PALETTE_MESSAGE]);
    }

    #[test]
    fn shade_lines_are_one_based() {
        let shades = vyra_color::generate_shade_series("#808080", 3).unwrap();
        assert_eq!(shade_line(&shades[0], false), "Shade  1  #000000  rgb(0, 0, 0)");
    }

    #[test]
    fn swatch_is_omitted_without_color() {
        assert!(swatch(Rgb::new(1, 2, 3), false).is_empty());
        assert_eq!(color_line("#010203", Rgb::new(1, 2, 3), false), "#010203  rgb(1, 2, 3)");
    }

    #[test]
    fn plain_toast_lines_use_markers() {
        let mut notifier = vyra_util::Notifier::default();
        let toast = notifier.show("Color already in palette", ToastKind::Info).clone();
        assert_eq!(toast_line(&toast, false), "• Color already in palette");
    }
}
