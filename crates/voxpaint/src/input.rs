//! Movement keys and the set of keys held during a frame.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Keys bound to camera movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    /// Forward.
    W,
    /// Strafe right.
    A,
    /// Backward.
    S,
    /// Strafe left.
    D,
    /// Up.
    Space,
    /// Down.
    LShift,
}

impl MovementKey {
    /// Every movement key, in the order the controller applies them.
    pub const ALL: [Self; 6] = [Self::W, Self::S, Self::D, Self::A, Self::Space, Self::LShift];

    /// Short lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::W => "w",
            Self::A => "a",
            Self::S => "s",
            Self::D => "d",
            Self::Space => "space",
            Self::LShift => "lshift",
        }
    }

    const fn mask(self) -> u8 {
        match self {
            Self::W => 1,
            Self::A => 2,
            Self::S => 4,
            Self::D => 8,
            Self::Space => 16,
            Self::LShift => 32,
        }
    }
}

impl fmt::Display for MovementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovementKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" => Ok(Self::W),
            "a" => Ok(Self::A),
            "s" => Ok(Self::S),
            "d" => Ok(Self::D),
            "space" => Ok(Self::Space),
            "lshift" | "shift" => Ok(Self::LShift),
            _ => Err(AppError::UnknownKey(s.to_owned())),
        }
    }
}

/// Keys held down for a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HeldKeys {
    bits: u8,
}

impl HeldKeys {
    /// No keys held.
    pub const NONE: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Parses a comma-separated key list such as `"w,space"`.
    ///
    /// Empty entries are ignored, so `""` is the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownKey`] for a name that is not a movement key.
    pub fn parse(list: &str) -> Result<Self, AppError> {
        let mut keys = Self::new();
        for name in list.split(',').filter(|n| !n.trim().is_empty()) {
            keys.press(name.parse()?);
        }
        Ok(keys)
    }

    /// Marks `key` as held.
    pub fn press(&mut self, key: MovementKey) {
        self.bits |= key.mask();
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: MovementKey) {
        self.bits &= !key.mask();
    }

    /// Returns the set with `key` added.
    #[must_use]
    pub const fn with(self, key: MovementKey) -> Self {
        Self {
            bits: self.bits | key.mask(),
        }
    }

    /// Is `key` held?
    #[inline]
    #[must_use]
    pub const fn is_held(self, key: MovementKey) -> bool {
        self.bits & key.mask() != 0
    }

    /// Is nothing held?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Held keys in application order.
    pub fn iter(self) -> impl Iterator<Item = MovementKey> {
        MovementKey::ALL.into_iter().filter(move |&k| self.is_held(k))
    }
}

impl FromIterator<MovementKey> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = MovementKey>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl fmt::Display for HeldKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(key.name())?;
        }
        Ok(())
    }
}
