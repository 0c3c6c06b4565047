// Minimal arithmetic trait for generic Haar transforms (no_std, no external deps)

/// Element type the transforms operate on.
///
/// The averaging/differencing step uses the type's own division operator,
/// so floats divide exactly and integers truncate. Integer round-trips are
/// therefore only exact when every division along the recursion is exact;
/// see the crate docs.
pub trait Scalar:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn two() -> Self;
    fn abs(self) -> Self;
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    /// Attempt to convert a `usize` into the element type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }
    fn two() -> Self {
        2.0
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }
    fn two() -> Self {
        2.0
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
}

impl Scalar for i32 {
    fn zero() -> Self {
        0
    }
    fn two() -> Self {
        2
    }
    fn abs(self) -> Self {
        i32::abs(self)
    }
    fn from_f64(x: f64) -> Self {
        x as i32
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn from_usize(x: usize) -> Option<Self> {
        if x <= i32::MAX as usize {
            Some(x as i32)
        } else {
            None
        }
    }
}

impl Scalar for i64 {
    fn zero() -> Self {
        0
    }
    fn two() -> Self {
        2
    }
    fn abs(self) -> Self {
        i64::abs(self)
    }
    fn from_f64(x: f64) -> Self {
        x as i64
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn from_usize(x: usize) -> Option<Self> {
        if x <= i64::MAX as usize {
            Some(x as i64)
        } else {
            None
        }
    }
}
