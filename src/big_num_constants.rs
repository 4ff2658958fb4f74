use std::mem::size_of;
use std::rc::Rc;

/// One machine word of a multi-limb integer.
pub type Limb = u32;
/// Signed view of a limb, used for arithmetic shifts.
pub type SignedLimb = i32;
/// Wide enough to hold the product of two limbs plus two carries.
pub type DoubleLimb = u64;

pub const LIMB_BITS: u32 = Limb::BITS;

pub const LIMB_MAX: Limb = Limb::MAX;

/// Limbs stored inline before spilling to the heap: as many as fit in the
/// footprint of the heap handle itself.
pub const INLINE_CAPACITY: usize = {
    let n = size_of::<Rc<[Limb]>>() / size_of::<Limb>();
    if n == 0 { 1 } else { n }
};

/// Decimal digits handled per limb-sized chunk during conversion.
pub const DECIMAL_CHUNK_DIGITS: usize = 9;

/// `10^DECIMAL_CHUNK_DIGITS`, the largest power of ten below `2^32`.
pub const DECIMAL_CHUNK: Limb = 1_000_000_000;
