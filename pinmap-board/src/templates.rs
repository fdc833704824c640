//! Raspberry Pi header tables
//!
//! Revision 1 boards route GPIO0/GPIO1/GPIO21 where later 26-pin boards
//! carry GPIO2/GPIO3/GPIO27. The 40-pin header extends revision 2.

/// Revision 1, 26 pins
pub static REV1: &[(u8, &str)] = &[
    (1, "3.3V"),
    (2, "5V"),
    (3, "GPIO0"),
    (4, "5V"),
    (5, "GPIO1"),
    (6, "GND"),
    (7, "GPIO4"),
    (8, "GPIO14"),
    (9, "GND"),
    (10, "GPIO15"),
    (11, "GPIO17"),
    (12, "GPIO18"),
    (13, "GPIO21"),
    (14, "GND"),
    (15, "GPIO22"),
    (16, "GPIO23"),
    (17, "3.3V"),
    (18, "GPIO24"),
    (19, "GPIO10"),
    (20, "GND"),
    (21, "GPIO9"),
    (22, "GPIO25"),
    (23, "GPIO11"),
    (24, "GPIO8"),
    (25, "GND"),
    (26, "GPIO7"),
];

/// Revision 2, 26 pins
pub static REV2: &[(u8, &str)] = &[
    (1, "3.3V"),
    (2, "5V"),
    (3, "GPIO2"),
    (4, "5V"),
    (5, "GPIO3"),
    (6, "GND"),
    (7, "GPIO4"),
    (8, "GPIO14"),
    (9, "GND"),
    (10, "GPIO15"),
    (11, "GPIO17"),
    (12, "GPIO18"),
    (13, "GPIO27"),
    (14, "GND"),
    (15, "GPIO22"),
    (16, "GPIO23"),
    (17, "3.3V"),
    (18, "GPIO24"),
    (19, "GPIO10"),
    (20, "GND"),
    (21, "GPIO9"),
    (22, "GPIO25"),
    (23, "GPIO11"),
    (24, "GPIO8"),
    (25, "GND"),
    (26, "GPIO7"),
];

/// Pins 27-40 of the 40-pin header
///
/// Pins 27 and 28 are the HAT ID EEPROM bus.
pub static REV3_EXTENSION: &[(u8, &str)] = &[
    (27, "DNC"),
    (28, "DNC"),
    (29, "GPIO5"),
    (30, "GND"),
    (31, "GPIO6"),
    (32, "GPIO12"),
    (33, "GPIO13"),
    (34, "GND"),
    (35, "GPIO19"),
    (36, "GPIO16"),
    (37, "GPIO26"),
    (38, "GPIO20"),
    (39, "GND"),
    (40, "GPIO21"),
];
