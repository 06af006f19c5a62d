#![warn(missing_docs)]

//! `rlc-sn` provides [`SequenceNumber`], a 10-bit wrapping counter used to number protocol data
//! units in an acknowledged-mode sliding-window link layer. Sequence numbers cycle through
//! `[0, 1023]`, and are ordered relative to a modulus base—normally the lower edge of the sender's
//! or receiver's window—so that numbers just past the wraparound point compare greater than
//! numbers just before it.
//!
//! # Numbering Frames
//!
//! A counter is advanced as each new frame is sent. Arithmetic always wraps within the sequence
//! space:
//!
//! ```
//! use rlc_sn::SequenceNumber;
//!
//! let mut next_tx = SequenceNumber::new(1022);
//!
//! assert_eq!(next_tx.post_increment().value(), 1022);
//! assert_eq!(next_tx.post_increment().value(), 1023);
//! assert_eq!(next_tx.value(), 0);
//!
//! assert_eq!((next_tx - 1).value(), 1023);
//! assert_eq!((next_tx + 5).value(), 5);
//! ```
//!
//! # Comparing Within a Window
//!
//! The owner of a window keeps one sequence number as the window's lower edge, and assigns it as
//! the modulus base of every sequence number before comparing:
//!
//! ```
//! use rlc_sn::SequenceNumber;
//!
//! let window_base = SequenceNumber::new(1020);
//!
//! let mut old = SequenceNumber::new(1023);
//! let mut new = SequenceNumber::new(2);
//! old.set_modulus_base(window_base);
//! new.set_modulus_base(window_base);
//!
//! assert!(old < new);
//! ```
//!
//! Comparing two sequence numbers with different modulus bases is a logic error. The comparison
//! operators panic in that case; [`SequenceNumber::try_cmp`] returns a [`ModulusBaseMismatch`]
//! instead:
//!
//! ```
//! use rlc_sn::SequenceNumber;
//!
//! let a = SequenceNumber::new(4).with_modulus_base(0u16);
//! let b = SequenceNumber::new(4).with_modulus_base(1u16);
//!
//! assert!(a.try_cmp(&b).is_err());
//! ```
//!
//! The order of two sequence numbers which are [`HALF_MODULUS`] or more apart is not meaningful,
//! so a window must never span more than `HALF_MODULUS - 1` sequence numbers past its base.
//!
//! # Raw Differences
//!
//! Subtracting one sequence number from another yields the plain 16-bit difference of their
//! values, without regard for the modulus base:
//!
//! ```
//! use rlc_sn::SequenceNumber;
//!
//! assert_eq!(SequenceNumber::new(5) - SequenceNumber::new(3), 2);
//! assert_eq!(SequenceNumber::new(2) - SequenceNumber::new(5), 65533);
//! ```

mod sequence_number;

pub use sequence_number::ModulusBaseMismatch;
pub use sequence_number::SequenceNumber;

/// The number of distinct sequence numbers.
pub const MODULUS: u16 = 1024;

/// Half of the sequence space. Sequence numbers this far apart have no meaningful order.
pub const HALF_MODULUS: u16 = MODULUS / 2;

/// The largest sequence number.
pub const MAX_VALUE: u16 = MODULUS - 1;
