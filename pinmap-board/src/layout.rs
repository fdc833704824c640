//! Header layout descriptions
//!
//! A layout maps each physical pin number to the label printed on the
//! board reference (`GPIO17`, `5V`, `GND`, ...). It carries no claim state.

use heapless::{String, Vec};
use pinmap_core::pins::{PinDescriptor, PinKind, SignalInfo, SignalName, MAX_PINS};
use pinmap_core::slots::MAX_LABEL_LEN;

/// Label of one physical header pin
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLabel {
    /// General purpose pin carrying the named signal
    Gpio(SignalName),
    /// 5V rail
    Power5v,
    /// 3.3V rail
    Power3v3,
    /// Ground
    Ground,
    /// Do not connect
    DoNotConnect,
}

impl PinLabel {
    /// Parse a board reference label
    ///
    /// # Example
    /// ```
    /// use pinmap_board::PinLabel;
    ///
    /// assert_eq!(PinLabel::parse("GND").unwrap(), PinLabel::Ground);
    /// assert!(PinLabel::parse("GPIO4").unwrap().signal_name() == Some("GPIO4"));
    /// ```
    pub fn parse(label: &str) -> Result<Self, LayoutError> {
        match label {
            "5V" => Ok(PinLabel::Power5v),
            "3.3V" | "3V3" => Ok(PinLabel::Power3v3),
            "GND" => Ok(PinLabel::Ground),
            "DNC" => Ok(PinLabel::DoNotConnect),
            _ => {
                let number = label.strip_prefix("GPIO").ok_or(LayoutError::InvalidLabel)?;
                if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(LayoutError::InvalidLabel);
                }
                let name = SignalName::try_from(label).map_err(|_| LayoutError::InvalidLabel)?;
                Ok(PinLabel::Gpio(name))
            }
        }
    }

    /// Get the pin kind this label stands for
    pub fn kind(&self) -> PinKind {
        match self {
            PinLabel::Gpio(_) => PinKind::Signal,
            PinLabel::Power5v => PinKind::Power5v,
            PinLabel::Power3v3 => PinKind::Power3v3,
            PinLabel::Ground => PinKind::Ground,
            PinLabel::DoNotConnect => PinKind::Reserved,
        }
    }

    /// Get the signal name for GPIO labels
    pub fn signal_name(&self) -> Option<&str> {
        match self {
            PinLabel::Gpio(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Build an unclaimed descriptor for this pin
    pub fn descriptor(&self) -> PinDescriptor {
        match self {
            PinLabel::Gpio(name) => PinDescriptor::Signal(SignalInfo {
                name: name.clone(),
                claimed_elsewhere: false,
                owner: None,
            }),
            PinLabel::Power5v => PinDescriptor::Power5v,
            PinLabel::Power3v3 => PinDescriptor::Power3v3,
            PinLabel::Ground => PinDescriptor::Ground,
            PinLabel::DoNotConnect => PinDescriptor::Reserved,
        }
    }
}

/// Errors building a header layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// Label is not `GPIOn`, `5V`, `3.3V`, `GND` or `DNC`
    InvalidLabel,
    /// Pin number is zero, above [`MAX_PINS`] or not a number
    InvalidPin,
    /// Same pin number listed twice
    DuplicatePin(u8),
    /// Same signal on two pins
    DuplicateSignal(u8),
    /// Layout name too long
    NameTooLong,
    /// More pins than the layout can hold
    TooManyPins,
    /// Malformed TOML document
    Syntax,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::InvalidLabel => f.write_str("unknown pin label"),
            LayoutError::InvalidPin => f.write_str("invalid pin number"),
            LayoutError::DuplicatePin(pin) => write!(f, "pin {} listed twice", pin),
            LayoutError::DuplicateSignal(pin) => write!(f, "pin {} repeats a signal", pin),
            LayoutError::NameTooLong => f.write_str("layout name too long"),
            LayoutError::TooManyPins => f.write_str("too many pins"),
            LayoutError::Syntax => f.write_str("malformed header description"),
        }
    }
}

/// Physical header layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    name: String<MAX_LABEL_LEN>,
    /// Sorted by pin number
    pins: Vec<(u8, PinLabel), MAX_PINS>,
}

impl HeaderLayout {
    /// Create an empty layout
    pub fn new(name: &str) -> Result<Self, LayoutError> {
        Ok(Self {
            name: String::try_from(name).map_err(|_| LayoutError::NameTooLong)?,
            pins: Vec::new(),
        })
    }

    /// Build a layout from a `(pin, label)` table
    pub fn from_table(name: &str, table: &[(u8, &str)]) -> Result<Self, LayoutError> {
        let mut layout = Self::new(name)?;
        for &(pin, label) in table {
            layout.insert(pin, PinLabel::parse(label)?)?;
        }
        Ok(layout)
    }

    /// Add one pin
    ///
    /// Pin numbers start at 1. Each pin and each signal may appear once.
    pub fn insert(&mut self, pin: u8, label: PinLabel) -> Result<(), LayoutError> {
        if pin == 0 || usize::from(pin) > MAX_PINS {
            return Err(LayoutError::InvalidPin);
        }
        if let Some(name) = label.signal_name() {
            if self.pin_of(name).is_some() {
                return Err(LayoutError::DuplicateSignal(pin));
            }
        }
        let at = match self.pins.binary_search_by_key(&pin, |(p, _)| *p) {
            Ok(_) => return Err(LayoutError::DuplicatePin(pin)),
            Err(at) => at,
        };
        self.pins
            .insert(at, (pin, label))
            .map_err(|_| LayoutError::TooManyPins)
    }

    /// Get the layout name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of physical pins
    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    /// Iterate pins in ascending order
    pub fn pins(&self) -> impl Iterator<Item = (u8, &PinLabel)> {
        self.pins.iter().map(|(pin, label)| (*pin, label))
    }

    /// Get the label of a pin
    pub fn label(&self, pin: u8) -> Option<&PinLabel> {
        self.pins
            .binary_search_by_key(&pin, |(p, _)| *p)
            .ok()
            .map(|i| &self.pins[i].1)
    }

    /// Iterate `(pin, signal)` for every GPIO pin
    pub fn signals(&self) -> impl Iterator<Item = (u8, &str)> {
        self.pins
            .iter()
            .filter_map(|(pin, label)| label.signal_name().map(|name| (*pin, name)))
    }

    /// Find the pin carrying a signal
    pub fn pin_of(&self, signal: &str) -> Option<u8> {
        self.signals()
            .find(|(_, name)| *name == signal)
            .map(|(pin, _)| pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(PinLabel::parse("5V").unwrap(), PinLabel::Power5v);
        assert_eq!(PinLabel::parse("3.3V").unwrap(), PinLabel::Power3v3);
        assert_eq!(PinLabel::parse("DNC").unwrap().kind(), PinKind::Reserved);
        assert_eq!(PinLabel::parse("GPIO17").unwrap().signal_name(), Some("GPIO17"));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(PinLabel::parse("VCC"), Err(LayoutError::InvalidLabel));
        assert_eq!(PinLabel::parse("GPIO"), Err(LayoutError::InvalidLabel));
        assert_eq!(PinLabel::parse("GPIOx"), Err(LayoutError::InvalidLabel));
        assert_eq!(PinLabel::parse("gnd"), Err(LayoutError::InvalidLabel));
    }

    #[test]
    fn test_from_table_sorts_pins() {
        let layout = HeaderLayout::from_table("test", &[(3, "GPIO2"), (1, "3.3V"), (2, "5V")]).unwrap();
        let order: Vec<u8, 4> = layout.pins().map(|(pin, _)| pin).collect();
        assert_eq!(order.as_slice(), &[1, 2, 3]);
        assert_eq!(layout.pin_count(), 3);
        assert_eq!(layout.name(), "test");
    }

    #[test]
    fn test_signal_lookup() {
        let layout = HeaderLayout::from_table("test", &[(1, "3.3V"), (7, "GPIO4"), (11, "GPIO17")]).unwrap();
        assert_eq!(layout.pin_of("GPIO17"), Some(11));
        assert_eq!(layout.pin_of("GPIO18"), None);
        assert_eq!(layout.signals().count(), 2);
        assert_eq!(layout.label(1), Some(&PinLabel::Power3v3));
        assert_eq!(layout.label(2), None);
    }

    #[test]
    fn test_rejects_duplicates() {
        assert_eq!(
            HeaderLayout::from_table("dup", &[(1, "GND"), (1, "5V")]),
            Err(LayoutError::DuplicatePin(1))
        );
        assert_eq!(
            HeaderLayout::from_table("dup", &[(3, "GPIO2"), (5, "GPIO2")]),
            Err(LayoutError::DuplicateSignal(5))
        );
    }

    #[test]
    fn test_rejects_out_of_range_pin() {
        let mut layout = HeaderLayout::new("range").unwrap();
        assert_eq!(layout.insert(0, PinLabel::Ground), Err(LayoutError::InvalidPin));
        assert_eq!(layout.insert(65, PinLabel::Ground), Err(LayoutError::InvalidPin));
        assert!(layout.insert(64, PinLabel::Ground).is_ok());
    }

    #[test]
    fn test_descriptor_is_unclaimed() {
        let desc = PinLabel::parse("GPIO22").unwrap().descriptor();
        let info = desc.signal().unwrap();
        assert_eq!(info.name.as_str(), "GPIO22");
        assert!(!info.claimed_elsewhere);
        assert!(info.owner.is_none());
    }
}
