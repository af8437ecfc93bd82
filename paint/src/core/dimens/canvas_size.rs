// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`CanvasSize`] is a struct that holds the `width` and `height` (in pixels) of the
//! canvas. [`Width`] and [`Height`] are newtypes so that it isn't possible to use a
//! `width` when you intended to use a `height` and vice versa.
//!
//! # Examples
//!
//! ```
//! use r3bl_paint::{CanvasSize, height, width};
//!
//! // Note the order of the arguments don't matter below.
//! let size: CanvasSize = width(3) + height(2);
//! let size_2: CanvasSize = height(2) + width(3);
//! assert_eq!(size, size_2);
//! assert_eq!(size.pixel_count(), 6);
//! ```

use std::{fmt::{Display, Formatter, Result},
          ops::{Add, Deref}};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Width(pub u32);

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Height(pub u32);

#[must_use]
pub fn width(arg: u32) -> Width { Width(arg) }

#[must_use]
pub fn height(arg: u32) -> Height { Height(arg) }

impl Deref for Width {
    type Target = u32;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl Deref for Height {
    type Target = u32;

    fn deref(&self) -> &Self::Target { &self.0 }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: Width,
    pub height: Height,
}

mod constructor {
    use super::{Add, CanvasSize, Height, Width};

    impl CanvasSize {
        #[must_use]
        pub fn new(arg_size: impl Into<CanvasSize>) -> Self { arg_size.into() }
    }

    impl From<(Width, Height)> for CanvasSize {
        fn from((width, height): (Width, Height)) -> Self { CanvasSize { width, height } }
    }

    impl From<(Height, Width)> for CanvasSize {
        fn from((height, width): (Height, Width)) -> Self { CanvasSize { width, height } }
    }

    impl From<(u32, u32)> for CanvasSize {
        fn from((width, height): (u32, u32)) -> Self {
            CanvasSize {
                width: Width(width),
                height: Height(height),
            }
        }
    }

    impl Add<Height> for Width {
        type Output = CanvasSize;

        fn add(self, rhs: Height) -> Self::Output { (self, rhs).into() }
    }

    impl Add<Width> for Height {
        type Output = CanvasSize;

        fn add(self, rhs: Width) -> Self::Output { (self, rhs).into() }
    }
}

impl CanvasSize {
    /// Number of pixels in a buffer of this size.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (*self.width as usize).saturating_mul(*self.height as usize)
    }

    /// A canvas with a zero dimension can't hold any pixels, and isn't allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool { *self.width == 0 || *self.height == 0 }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool { x < *self.width && y < *self.height }
}

impl Display for CanvasSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}x{}", *self.width, *self.height)
    }
}
