//! Custom header descriptions
//!
//! Boards without a built-in template describe their header in TOML:
//!
//! ```toml
//! name = "custom hat"
//!
//! [pins]
//! 1 = "3.3V"
//! 2 = "5V"
//! 3 = "GPIO2"
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::Deserialize;

use crate::layout::{HeaderLayout, LayoutError, PinLabel};

const DEFAULT_NAME: &str = "custom header";

#[derive(Debug, Deserialize)]
struct RawLayout {
    name: Option<String>,
    pins: BTreeMap<String, String>,
}

/// Parse a TOML header description
///
/// Keys of the `[pins]` table are physical pin numbers, values are board
/// reference labels. A missing `name` falls back to "custom header".
pub fn parse_layout(input: &str) -> Result<HeaderLayout, LayoutError> {
    let raw: RawLayout = toml::from_str(input).map_err(|_| LayoutError::Syntax)?;

    let mut layout = HeaderLayout::new(raw.name.as_deref().unwrap_or(DEFAULT_NAME))?;
    for (pin, label) in &raw.pins {
        let pin = parse_pin(pin)?;
        layout.insert(pin, PinLabel::parse(label.trim())?)?;
    }
    Ok(layout)
}

/// Parse a `[pins]` key: decimal digits only
fn parse_pin(key: &str) -> Result<u8, LayoutError> {
    let key = key.trim();
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LayoutError::InvalidPin);
    }
    key.parse().map_err(|_| LayoutError::InvalidPin)
}
