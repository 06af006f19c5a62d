use crate::{HALF_MODULUS, MAX_VALUE, MODULUS};

use std::cmp::Ordering;
use std::fmt;
use std::ops;

use log::error;
use thiserror::Error;

/// Returned when two sequence numbers with different modulus bases are compared.
///
/// This always indicates a bug in the owning window logic: the remedy is to assign a common base
/// before comparing again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("modulus base mismatch: {left} != {right}")]
pub struct ModulusBaseMismatch {
    /// The modulus base of the left-hand operand.
    pub left: u16,
    /// The modulus base of the right-hand operand.
    pub right: u16,
}

/// A 10-bit sequence number which wraps at [`MODULUS`].
///
/// Ordering is evaluated relative to a modulus base, which is normally the lower edge of the
/// active transfer window. Both operands of a comparison must carry the same base; comparing
/// sequence numbers with different bases via `==`, `<`, or [`Ord::cmp`] will panic, whereas
/// [`SequenceNumber::try_cmp`] reports the mismatch as an error.
///
/// Two sequence numbers which are exactly [`HALF_MODULUS`] apart have no meaningful order. The
/// owner of the base is expected to keep its window narrower than that.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceNumber {
    value: u16,
    modulus_base: u16,
}

impl SequenceNumber {
    /// Creates a sequence number from `value` reduced modulo [`MODULUS`], with a modulus base of
    /// zero.
    pub fn new(value: u16) -> Self {
        Self {
            value: value % MODULUS,
            modulus_base: 0,
        }
    }

    /// Returns the raw value, in the range `[0, MAX_VALUE]`.
    pub fn value(&self) -> u16 {
        self.value
    }

    /// Returns the current modulus base.
    pub fn modulus_base(&self) -> u16 {
        self.modulus_base
    }

    /// Replaces the raw value with `value` reduced modulo [`MODULUS`]. The modulus base is left
    /// unchanged.
    pub fn set_value(&mut self, value: u16) {
        self.value = value % MODULUS;
    }

    /// Sets the modulus base used for ordering. Accepts either a raw integer or another sequence
    /// number, in which case that sequence number's value is used.
    pub fn set_modulus_base<B: Into<u16>>(&mut self, base: B) {
        self.modulus_base = base.into() % MODULUS;
    }

    /// Returns a copy of `self` with the given modulus base.
    pub fn with_modulus_base<B: Into<u16>>(mut self, base: B) -> Self {
        self.set_modulus_base(base);
        self
    }

    /// Advances `self` by one and returns its previous value.
    pub fn post_increment(&mut self) -> Self {
        let prev = *self;
        self.value = (self.value + 1) & MAX_VALUE;
        prev
    }

    /// Returns `self + delta`, wrapped into the sequence space. The result carries the modulus
    /// base of `self`.
    pub fn add_delta(self, delta: u16) -> Self {
        Self {
            value: self.value.wrapping_add(delta) & MAX_VALUE,
            modulus_base: self.modulus_base,
        }
    }

    /// Returns `self - delta`, wrapped into the sequence space. The result carries the modulus
    /// base of `self`.
    pub fn sub_delta(self, delta: u16) -> Self {
        Self {
            value: self.value.wrapping_sub(delta) & MAX_VALUE,
            modulus_base: self.modulus_base,
        }
    }

    /// Returns the plain 16-bit difference of the two raw values.
    ///
    /// No circular correction is applied: `2 - 5` yields `65533`, not `1021`. Callers use this
    /// when the operands are already known to be in order.
    pub fn raw_diff(self, other: Self) -> u16 {
        self.value.wrapping_sub(other.value)
    }

    // Distance from the modulus base, in [-HALF_MODULUS, HALF_MODULUS)
    fn lead(&self) -> i16 {
        let lead = self.value.wrapping_sub(self.modulus_base) & MAX_VALUE;

        if lead >= HALF_MODULUS {
            lead as i16 - MODULUS as i16
        } else {
            lead as i16
        }
    }

    /// Compares `self` and `other` in circular order relative to their shared modulus base.
    ///
    /// Sequence numbers ahead of the base compare greater than those behind it, so that with a base
    /// of 1020, the sequence 1021, 1022, 1023, 0, 1 is strictly increasing.
    ///
    /// # Error Handling
    ///
    /// Returns [`ModulusBaseMismatch`] if the two modulus bases differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ModulusBaseMismatch> {
        if self.modulus_base != other.modulus_base {
            return Err(ModulusBaseMismatch {
                left: self.modulus_base,
                right: other.modulus_base,
            });
        }

        if self.value == other.value {
            return Ok(Ordering::Equal);
        }

        Ok(self.lead().cmp(&other.lead()))
    }

    /// Returns whether `self` and `other` hold the same value.
    ///
    /// # Error Handling
    ///
    /// Returns [`ModulusBaseMismatch`] if the two modulus bases differ, even if the values match.
    pub fn try_eq(&self, other: &Self) -> Result<bool, ModulusBaseMismatch> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }
}

impl From<u16> for SequenceNumber {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

impl From<SequenceNumber> for u16 {
    fn from(sn: SequenceNumber) -> Self {
        sn.value
    }
}

impl ops::Add<u16> for SequenceNumber {
    type Output = Self;

    fn add(self, delta: u16) -> Self {
        self.add_delta(delta)
    }
}

impl ops::Sub<u16> for SequenceNumber {
    type Output = Self;

    fn sub(self, delta: u16) -> Self {
        self.sub_delta(delta)
    }
}

impl ops::Sub for SequenceNumber {
    type Output = u16;

    fn sub(self, other: Self) -> u16 {
        self.raw_diff(other)
    }
}

impl ops::AddAssign<u16> for SequenceNumber {
    fn add_assign(&mut self, delta: u16) {
        *self = self.add_delta(delta);
    }
}

impl ops::SubAssign<u16> for SequenceNumber {
    fn sub_assign(&mut self, delta: u16) {
        *self = self.sub_delta(delta);
    }
}

impl Ord for SequenceNumber {
    /// # Panics
    ///
    /// Panics if the two modulus bases differ.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.try_cmp(other) {
            Ok(ordering) => ordering,
            Err(err) => {
                error!("Compared {} and {} across windows: {}", self, other, err);
                panic!("{}", err);
            }
        }
    }
}

impl PartialOrd for SequenceNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SequenceNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SequenceNumber {}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
