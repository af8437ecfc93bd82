// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Identity of a layer. Ids are positive, handed out in increasing order by
/// [`crate::LayerStack`], and never reused within a session.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub u32);

impl LayerId {
    pub const FIRST: LayerId = LayerId(1);

    #[must_use]
    pub fn is_valid(&self) -> bool { self.0 > 0 }

    /// [None] once the id space is used up.
    #[must_use]
    pub fn next(&self) -> Option<LayerId> { self.0.checked_add(1).map(LayerId) }
}

impl From<u32> for LayerId {
    fn from(it: u32) -> Self { Self(it) }
}

impl Display for LayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_next() {
        assert_eq2!(LayerId::FIRST.next(), Some(LayerId(2)));
        assert_eq2!(LayerId(u32::MAX - 1).next(), Some(LayerId(u32::MAX)));
        assert_eq2!(LayerId(u32::MAX).next(), None);
    }
}
