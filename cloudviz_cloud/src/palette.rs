// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word colors.

use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::error::{CloudError, CloudResult};

/// The ten-color categorical scheme (`#1f77b4`, `#ff7f0e`, ...).
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgba8(0x1f, 0x77, 0xb4, 0xff),
    Color::from_rgba8(0xff, 0x7f, 0x0e, 0xff),
    Color::from_rgba8(0x2c, 0xa0, 0x2c, 0xff),
    Color::from_rgba8(0xd6, 0x27, 0x28, 0xff),
    Color::from_rgba8(0x94, 0x67, 0xbd, 0xff),
    Color::from_rgba8(0x8c, 0x56, 0x4b, 0xff),
    Color::from_rgba8(0xe3, 0x77, 0xc2, 0xff),
    Color::from_rgba8(0x7f, 0x7f, 0x7f, 0xff),
    Color::from_rgba8(0xbc, 0xbd, 0x22, 0xff),
    Color::from_rgba8(0x17, 0xbe, 0xcf, 0xff),
];

/// Parses CSS color strings (`#rrggbb`, `rgb(...)`, named colors) into sRGB colors.
pub fn parse_palette<S: AsRef<str>>(entries: &[S]) -> CloudResult<Vec<Color>> {
    entries
        .iter()
        .map(|entry| {
            let entry = entry.as_ref();
            parse_color(entry)
                .map(|c| c.to_alpha_color::<Srgb>())
                .map_err(|_| CloudError::InvalidColor(entry.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(c: Color) -> (u8, u8, u8, u8) {
        let c = c.to_rgba8();
        (c.r, c.g, c.b, c.a)
    }

    #[test]
    fn category10_starts_with_blue_and_orange() {
        assert_eq!(rgba(CATEGORY10[0]), (0x1f, 0x77, 0xb4, 0xff));
        assert_eq!(rgba(CATEGORY10[1]), (0xff, 0x7f, 0x0e, 0xff));
    }

    #[test]
    fn parses_hex_and_names() {
        let colors = parse_palette(&["#d62728", "steelblue"]).unwrap();
        assert_eq!(rgba(colors[0]), (0xd6, 0x27, 0x28, 0xff));
        assert_eq!(rgba(colors[1]), (70, 130, 180, 255));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_palette(&["#12", "red"]).unwrap_err();
        assert!(matches!(err, CloudError::InvalidColor(ref s) if s == "#12"), "{err}");
    }
}
