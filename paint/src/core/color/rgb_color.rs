// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opaque 24-bit color. This is what the color picker produces, what color sampling
//! returns, and what the code compiler emits in fill statements. In JSON it is a
//! `#rrggbb` string.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use super::parse_hex_color;
use crate::{CommonError, CommonErrorType, CommonResult};

#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::from_u8(255, 255, 255);
    pub const BLACK: RgbColor = RgbColor::from_u8(0, 0, 0);

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// # Errors
    ///
    /// Returns an error if the input string is not a valid `#rrggbb` hex color.
    pub fn try_from_hex_color(input: &str) -> CommonResult<RgbColor> {
        match parse_hex_color(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => CommonError::new_error_result(
                CommonErrorType::InvalidHexColorFormat,
                &format!("Invalid hex color: '{input}'"),
            ),
        }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for RgbColor {
    fn default() -> Self { Self::BLACK }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl Display for RgbColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.to_hex_string()) }
}

impl TryFrom<String> for RgbColor {
    type Error = miette::Report;

    fn try_from(input: String) -> CommonResult<Self> { Self::try_from_hex_color(&input) }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self { color.to_hex_string() }
}
