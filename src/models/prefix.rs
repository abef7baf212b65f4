//! IPv4 prefix (CIDR) value type and bit math.
//!
//! Provides [`Prefix`], a normalized network address with prefix length,
//! along with the containment, sibling and bisection helpers the
//! aggregation and subtraction code is built on.

use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Network mask for a prefix length already checked against [`MAX_LENGTH`].
fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// IPv4 network: base address with host bits cleared, plus prefix length.
///
/// Ordering is by (base address, prefix length), so a supernet sorts before
/// the subnets that share its base address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: u32,
    len: u8,
}

impl Prefix {
    /// Build a prefix, zeroing any host bits set in `addr`.
    ///
    /// # Errors
    /// [`ParseError::InvalidPrefixLength`] when `len` exceeds [`MAX_LENGTH`].
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Prefix, ParseError> {
        if len > MAX_LENGTH {
            return Err(ParseError::InvalidPrefixLength {
                literal: format!("{addr}/{len}"),
                len,
            });
        }
        Ok(Prefix {
            addr: u32::from(addr) & get_cidr_mask(len),
            len,
        })
    }

    /// Network (lowest) address.
    pub fn addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.addr)
    }

    /// Prefix length.
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Base address as a raw integer.
    pub fn bits(&self) -> u32 {
        self.addr
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.len)
    }

    /// True when `ip` falls inside this prefix.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & get_cidr_mask(self.len) == self.addr
    }

    /// True when this prefix lies entirely inside `other` (equality included).
    pub fn subnet_of(&self, other: &Prefix) -> bool {
        self.len >= other.len && other.contains(self.addr())
    }

    /// True when `other` lies entirely inside this prefix (equality included).
    pub fn supernet_of(&self, other: &Prefix) -> bool {
        other.subnet_of(self)
    }

    /// True when the two prefixes share at least one address.
    pub fn overlaps(&self, other: &Prefix) -> bool {
        self.subnet_of(other) || other.subnet_of(self)
    }

    /// The two halves of this prefix, or `None` for a host route.
    pub fn halves(&self) -> Option<(Prefix, Prefix)> {
        if self.len >= MAX_LENGTH {
            return None;
        }
        let len = self.len + 1;
        let upper_bit = 1u32 << (MAX_LENGTH - len);
        Some((
            Prefix {
                addr: self.addr,
                len,
            },
            Prefix {
                addr: self.addr | upper_bit,
                len,
            },
        ))
    }

    /// The enclosing prefix one bit shorter, or `None` for `0.0.0.0/0`.
    pub fn parent(&self) -> Option<Prefix> {
        if self.len == 0 {
            return None;
        }
        let len = self.len - 1;
        Some(Prefix {
            addr: self.addr & get_cidr_mask(len),
            len,
        })
    }

    /// Merge two sibling prefixes into their parent.
    ///
    /// Only succeeds when both have the same length, `self` is the lower half
    /// and `other` the upper half of the same parent.
    pub fn merge_sibling(&self, other: &Prefix) -> Option<Prefix> {
        if self.len != other.len || self.len == 0 {
            return None;
        }
        let parent = self.parent()?;
        let (lower, upper) = parent.halves()?;
        if lower == *self && upper == *other {
            Some(parent)
        } else {
            None
        }
    }

    /// Remove `other` from this prefix.
    ///
    /// Bisects repeatedly, keeping the half that does not hold `other`, until
    /// the remaining half is `other` itself. Blocks come out largest first.
    /// Returns an empty list when `other` equals this prefix and `None` when
    /// `other` is not inside it.
    pub fn exclude(&self, other: &Prefix) -> Option<Vec<Prefix>> {
        if !other.subnet_of(self) {
            return None;
        }
        let mut remainder = Vec::with_capacity(usize::from(other.len - self.len));
        let mut current = *self;
        while current != *other {
            // other is strictly inside current, so current is never a host route
            let (lower, upper) = current.halves()?;
            if other.subnet_of(&lower) {
                log::trace!("exclude {other} from {current}: keep {upper}");
                remainder.push(upper);
                current = lower;
            } else {
                log::trace!("exclude {other} from {current}: keep {lower}");
                remainder.push(lower);
                current = upper;
            }
        }
        Some(remainder)
    }
}

impl FromStr for Prefix {
    type Err = ParseError;

    /// Parse `a.b.c.d/len`, zeroing host bits.
    fn from_str(s: &str) -> Result<Prefix, ParseError> {
        let literal = s.trim();
        let (addr, len) = literal
            .split_once('/')
            .ok_or_else(|| ParseError::InvalidFormat(literal.to_string()))?;

        let addr: Ipv4Addr = addr.parse().map_err(|_| ParseError::InvalidAddress {
            literal: literal.to_string(),
        })?;
        let len: u8 = len.parse().map_err(|_| ParseError::InvalidFormat(literal.to_string()))?;

        Prefix::new(addr, len).map_err(|_| ParseError::InvalidPrefixLength {
            literal: literal.to_string(),
            len,
        })
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr(), self.len)
    }
}
