// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parse `#rrggbb` hex color strings, the format the color picker in the property panel
//! hands to the session.

use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{all_consuming, map_res}};

use super::RgbColor;

/// Parse a hex color in the format `#rrggbb` (case insensitive). The entire input must
/// be consumed.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input is not exactly `#` followed by 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbColor> {
    let (rem, (_, red, green, blue)) =
        all_consuming((tag("#"), hex_primary, hex_primary, hex_primary)).parse(input)?;
    Ok((rem, RgbColor { red, green, blue }))
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |it: char| it.is_ascii_hexdigit()),
        |it: &str| u8::from_str_radix(it, 16),
    )
    .parse(input)
}
