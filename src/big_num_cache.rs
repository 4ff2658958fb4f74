use lazy_static::*;

use crate::big_num_constants::*;

lazy_static! {
    /// `DECIMAL_POWERS[k] == 10^k` for every chunk length the parser can see.
    pub static ref DECIMAL_POWERS: [Limb; DECIMAL_CHUNK_DIGITS + 1] = {
        let mut powers = [1 as Limb; DECIMAL_CHUNK_DIGITS + 1];
        for i in 1..=DECIMAL_CHUNK_DIGITS {
            powers[i] = powers[i - 1] * 10;
        }
        powers
    };
}
