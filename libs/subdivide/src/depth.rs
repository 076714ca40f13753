//! # Subdivision Depth
//!
//! Validated, non-negative recursion depth.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SubdivideError, SubdivideResult};

/// Number of midpoint-subdivision passes still to apply.
///
/// A depth of 0 means "emit nothing further". Signed values coming from a
/// UI (a slider, a JS number) are validated through [`Depth::new`] or
/// `TryFrom<i32>`; negative values are rejected, never clamped.
///
/// # Example
///
/// ```rust
/// use fractal_subdivide::{Depth, SubdivideError};
///
/// let depth = Depth::new(3)?;
/// assert_eq!(depth.get(), 3);
/// assert_eq!(depth.decrement(), Some(Depth::from(2)));
///
/// assert_eq!(
///     Depth::new(-1),
///     Err(SubdivideError::InvalidArgument { depth: -1 })
/// );
/// # Ok::<(), SubdivideError>(())
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Depth(u32);

impl Depth {
    /// Depth 0: no subdivision.
    pub const ZERO: Depth = Depth(0);

    /// Validates a signed depth.
    ///
    /// # Errors
    ///
    /// Returns [`SubdivideError::InvalidArgument`] when `depth` is negative.
    pub fn new(depth: i32) -> SubdivideResult<Self> {
        u32::try_from(depth)
            .map(Depth)
            .map_err(|_| SubdivideError::InvalidArgument { depth })
    }

    /// Returns the raw depth value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns true when no subdivision remains.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Depth of the next recursive call, or `None` at the base case.
    #[inline]
    pub const fn decrement(self) -> Option<Depth> {
        match self.0.checked_sub(1) {
            Some(next) => Some(Depth(next)),
            None => None,
        }
    }
}

impl From<u32> for Depth {
    fn from(depth: u32) -> Self {
        Depth(depth)
    }
}

impl TryFrom<i32> for Depth {
    type Error = SubdivideError;

    fn try_from(depth: i32) -> SubdivideResult<Self> {
        Depth::new(depth)
    }
}

impl From<Depth> for u32 {
    fn from(depth: Depth) -> Self {
        depth.0
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
