//! Closed-form mask construction.
//!
//! With place values `[1, Rs, Rs*Rp]`, the indices matching a pattern form a
//! regular bit layout that can be built axis by axis instead of enumerating
//! every assignment of the wildcards:
//!
//! ```text
//! subject   fixed s  -> 1 << s
//!           wildcard -> run of Rs ones at 0
//! predicate fixed p  -> unit << p*Rs
//!           wildcard -> unit replicated Rp times at stride Rs
//! object    fixed o  -> unit << o*Rs*Rp
//!           wildcard -> unit replicated Ro times at stride Rs*Rp
//! ```
//!
//! When every axis folded so far is a wildcard the unit is a run filling
//! `[0, stride)`, and replicating it is again a single run; `(*, *, *)` is the
//! run of `capacity` ones. Replication doubles the block each round, so a
//! wildcard costs `O(log R)` big-integer shifts and ORs.

use super::bounds::Bounds;
use super::pattern::Pattern;
use super::triple::Axis;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// `len` consecutive ones starting at bit 0.
pub(crate) fn ones(len: u64) -> BigUint {
    if len == 0 {
        return BigUint::zero();
    }
    (BigUint::one() << len) - 1u32
}

/// `count` copies of `unit`, the k-th shifted by `k * stride`.
///
/// `unit` must fit below `stride` for the copies not to overlap.
pub(crate) fn replicate(unit: &BigUint, stride: u64, count: u64) -> BigUint {
    let mut acc = BigUint::zero();
    let mut block = unit.clone();
    let mut span = 1u64;
    let mut offset = 0u64;
    let mut remaining = count;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc |= &block << offset;
            offset += span * stride;
        }
        remaining >>= 1;
        if remaining > 0 {
            block = &block | (&block << (span * stride));
            span *= 2;
        }
    }
    acc
}

/// Mask bits for `pattern`. Concrete slots must already be range-checked.
pub(crate) fn closed_form(bounds: Bounds, pattern: Pattern) -> BigUint {
    let strides = bounds.strides();

    // `filled`: unit is exactly the run [0, stride of the next axis)
    let (mut unit, mut filled) = match pattern.subject {
        Some(s) => (BigUint::one() << s, false),
        None => (ones(u64::from(bounds.get(Axis::Subject))), true),
    };

    for axis in [Axis::Predicate, Axis::Object] {
        let stride = strides[axis as usize];
        let count = u64::from(bounds.get(axis));
        match pattern.get(axis) {
            Some(v) => {
                unit <<= u64::from(v) * stride;
                filled = false;
            }
            None if filled => unit = ones(stride * count),
            None => unit = replicate(&unit, stride, count),
        }
    }
    unit
}

/// Reference mask: one bit per enumerated assignment of the wildcards.
#[cfg(test)]
pub(crate) fn enumerated(bounds: Bounds, pattern: Pattern) -> BigUint {
    let values = |axis: Axis| -> Vec<u32> {
        match pattern.get(axis) {
            Some(v) => vec![v],
            None => (0..bounds.get(axis)).collect(),
        }
    };
    let [s1, s2, s3] = bounds.strides();
    let mut mask = BigUint::zero();
    for s in values(Axis::Subject) {
        for p in values(Axis::Predicate) {
            for o in values(Axis::Object) {
                mask.set_bit(u64::from(s) * s1 + u64::from(p) * s2 + u64::from(o) * s3, true);
            }
        }
    }
    mask
}
