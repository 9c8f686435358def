use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A position inside a cyclic storage block of `modulus` slots.
///
/// Every arithmetic operation wraps around `modulus`, so traversal code
/// never special-cases the wrap boundary. Backward steps are computed as
/// a true non-negative remainder without ever forming a signed
/// intermediate, so they cannot underflow for any step size.
///
/// The type is a plain value: it carries no reference into the storage
/// it indexes, and all of its operations are total. Combining or
/// comparing indices taken from blocks of different sizes is a caller
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclicIndex {
    index: usize,
    modulus: usize,
}

impl CyclicIndex {
    /// Creates an index positioned at `index % modulus`.
    ///
    /// Panics if `modulus` is zero.
    pub const fn new(index: usize, modulus: usize) -> Self {
        assert!(modulus > 0, "Cyclic index modulus must be greater than zero");
        Self {
            index: index % modulus,
            modulus,
        }
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub const fn modulus(&self) -> usize {
        self.modulus
    }

    /// Moves `n` slots forward, wrapping at `modulus`.
    #[inline]
    pub const fn advance(self, n: usize) -> Self {
        Self {
            index: (self.index + n % self.modulus) % self.modulus,
            modulus: self.modulus,
        }
    }

    /// Moves `n` slots backward, wrapping at zero.
    ///
    /// `n` is reduced modulo `modulus` first, then taken away from an
    /// intermediate shifted up by one full turn, so the subtraction
    /// stays in unsigned range no matter how large `n` is.
    #[inline]
    pub const fn retreat(self, n: usize) -> Self {
        Self {
            index: (self.index + self.modulus - n % self.modulus) % self.modulus,
            modulus: self.modulus,
        }
    }

    /// Signed step: forward for positive `delta`, backward for negative.
    #[inline]
    pub const fn offset(self, delta: isize) -> Self {
        if delta >= 0 {
            self.advance(delta as usize)
        } else {
            self.retreat(delta.unsigned_abs())
        }
    }

    /// Moves one slot forward; `modulus - 1` wraps to `0`.
    #[inline(always)]
    pub const fn step_forward(self) -> Self {
        self.advance(1)
    }

    /// Moves one slot backward; `0` wraps to `modulus - 1`.
    #[inline(always)]
    pub const fn step_back(self) -> Self {
        self.retreat(1)
    }

    /// Number of forward steps needed to reach `self` from `origin`.
    ///
    /// Both indices must come from the same storage block.
    #[inline]
    pub const fn distance_from(self, origin: CyclicIndex) -> usize {
        debug_assert!(self.modulus == origin.modulus);
        (self.index + self.modulus - origin.index) % self.modulus
    }
}

impl Add<usize> for CyclicIndex {
    type Output = CyclicIndex;

    #[inline]
    fn add(self, rhs: usize) -> CyclicIndex {
        self.advance(rhs)
    }
}

impl Sub<usize> for CyclicIndex {
    type Output = CyclicIndex;

    #[inline]
    fn sub(self, rhs: usize) -> CyclicIndex {
        self.retreat(rhs)
    }
}

impl AddAssign<usize> for CyclicIndex {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        *self = self.advance(rhs);
    }
}

impl SubAssign<usize> for CyclicIndex {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        *self = self.retreat(rhs);
    }
}
