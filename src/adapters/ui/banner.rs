//! Startup banner: "MOODLENS" in figlet, each line tinted with the next
//! emotion colour from the fallback lexicon.

use crate::domain::lexicon::{NEUTRAL, RULES};
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Parse `#RRGGBB` into its channels.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Template colours in rule priority order, neutral last.
fn palette() -> Vec<Color> {
    RULES
        .iter()
        .map(|rule| rule.template.color)
        .chain(std::iter::once(NEUTRAL.color))
        .filter_map(hex_rgb)
        .map(|(r, g, b)| Color::Rgb { r, g, b })
        .collect()
}

/// Render the banner art, or a plain title if the font is unavailable.
fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("MOODLENS").map(|f| f.to_string()))
        .unwrap_or_else(|| "MOODLENS\n".to_string())
}

/// Prints the welcome banner, version, and whether the language model is wired.
pub fn print_welcome(model_configured: bool) {
    let mut out = stdout();
    let colors = palette();

    for (i, line) in banner_art().lines().enumerate() {
        if let Some(color) = colors.get(i % colors.len().max(1)) {
            let _ = out.execute(SetForegroundColor(*color));
        }
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\n"));
        let _ = out.execute(ResetColor);
    }

    let mode = if model_configured {
        "language model + keyword fallback"
    } else {
        "keyword classifier only"
    };
    if let Some((r, g, b)) = hex_rgb(NEUTRAL.color) {
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
    }
    let _ = out.execute(Print(format!(
        "v{} · {}\n",
        env!("CARGO_PKG_VERSION"),
        mode
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
