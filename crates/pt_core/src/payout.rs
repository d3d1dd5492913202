//! Prize and ITM (in-the-money) bonus lookup.
//!
//! Pure functions of (rank, field size, prize pool). Exactly-1000-player fields
//! use the deep large-field schedule; every other size pays the top five.

use serde::{Deserialize, Serialize};

/// Field size that selects the large-field schedule
pub const LARGE_FIELD_SIZE: u32 = 1000;

/// Share of the field that finishes in the money
pub const ITM_RATIO: f64 = 0.15;

/// Reputation bonus for winning outright; decays linearly through the ITM band
pub const ITM_BASE_BONUS: u32 = 100;

const GENERIC_FRACTIONS: [f64; 5] = [0.25, 0.15, 0.10, 0.08, 0.06];

const LARGE_FIELD_TOP_TEN: [f64; 10] =
    [0.23, 0.135, 0.085, 0.065, 0.055, 0.039, 0.029, 0.019, 0.013, 0.01];

/// (first rank, last rank, per-entrant fraction) after the top ten
const LARGE_FIELD_BANDS: [(u32, u32, f64); 10] = [
    (11, 15, 0.01),
    (16, 20, 0.007),
    (21, 25, 0.006),
    (26, 30, 0.005),
    (31, 35, 0.0045),
    (36, 40, 0.004),
    (41, 50, 0.0028),
    (51, 60, 0.0024),
    (61, 75, 0.0022),
    (76, 100, 0.0021),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutSchedule {
    /// Top five paid: 25 / 15 / 10 / 8 / 6 %
    Generic,
    /// Top hundred paid, 23 % for the winner
    LargeField,
}

impl PayoutSchedule {
    pub fn for_field(field_size: u32) -> Self {
        if field_size == LARGE_FIELD_SIZE {
            PayoutSchedule::LargeField
        } else {
            PayoutSchedule::Generic
        }
    }

    /// Share of the prize pool paid to `rank` (1-based). Zero outside the paid band.
    pub fn fraction(self, rank: u32) -> f64 {
        if rank == 0 {
            return 0.0;
        }
        match self {
            PayoutSchedule::Generic => {
                GENERIC_FRACTIONS.get(rank as usize - 1).copied().unwrap_or(0.0)
            }
            PayoutSchedule::LargeField => {
                if let Some(&fraction) = LARGE_FIELD_TOP_TEN.get(rank as usize - 1) {
                    return fraction;
                }
                LARGE_FIELD_BANDS
                    .iter()
                    .find(|(first, last, _)| (*first..=*last).contains(&rank))
                    .map(|&(_, _, fraction)| fraction)
                    .unwrap_or(0.0)
            }
        }
    }

    /// Last rank that receives a prize.
    pub fn paid_places(self) -> u32 {
        match self {
            PayoutSchedule::Generic => GENERIC_FRACTIONS.len() as u32,
            PayoutSchedule::LargeField => LARGE_FIELD_BANDS[LARGE_FIELD_BANDS.len() - 1].1,
        }
    }
}

/// floor(prize_pool × fraction) for the schedule matching `field_size`.
pub fn prize_for(rank: u32, field_size: u32, prize_pool: u64) -> u64 {
    let fraction = PayoutSchedule::for_field(field_size).fraction(rank);
    (prize_pool as f64 * fraction).floor() as u64
}

/// floor(field_size × 0.15)
pub fn itm_count(field_size: u32) -> u32 {
    (field_size as f64 * ITM_RATIO).floor() as u32
}

/// floor(100 × (itm − rank + 1) / itm) inside the money, else 0.
pub fn itm_bonus(rank: u32, field_size: u32) -> u32 {
    let itm = itm_count(field_size);
    if rank == 0 || rank > itm {
        return 0;
    }
    let multiplier = (itm - rank + 1) as f64 / itm as f64;
    (ITM_BASE_BONUS as f64 * multiplier).floor() as u32
}
