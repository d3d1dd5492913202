// 세션 통계 (ROI, ITM, 파이널 테이블, 우승 횟수, 평균 순위)
use super::result::EntryResult;
use crate::payout::itm_count;
use serde::{Deserialize, Serialize};

/// Aggregate performance over a tournament's recorded entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub entries: u32,
    pub total_buy_ins: u64,
    pub total_prizes: u64,
    /// (prizes − buy-ins) / buy-ins × 100
    pub roi: f64,
    /// % of entries finishing inside the ITM band
    pub itm_rate: f64,
    /// % of entries finishing at the final table
    pub final_table_rate: f64,
    pub victories: u32,
    pub average_rank: f64,
}

impl SessionStats {
    pub fn from_results(results: &[EntryResult], final_table_size: u32) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let entries = results.len() as u32;
        let total_buy_ins: u64 = results.iter().map(|r| r.buy_in).sum();
        let total_prizes: u64 = results.iter().map(|r| r.prize).sum();
        let itm = results.iter().filter(|r| r.rank <= itm_count(r.field_size)).count();
        let final_tables = results.iter().filter(|r| r.rank <= final_table_size).count();
        let victories = results.iter().filter(|r| r.is_victory()).count() as u32;
        let rank_sum: u64 = results.iter().map(|r| r.rank as u64).sum();

        let roi = if total_buy_ins > 0 {
            (total_prizes as f64 - total_buy_ins as f64) / total_buy_ins as f64 * 100.0
        } else {
            0.0
        };
        let share = |count: usize| count as f64 / entries as f64 * 100.0;

        Self {
            entries,
            total_buy_ins,
            total_prizes,
            roi,
            itm_rate: share(itm),
            final_table_rate: share(final_tables),
            victories,
            average_rank: rank_sum as f64 / entries as f64,
        }
    }

    pub fn net(&self) -> i64 {
        self.total_prizes as i64 - self.total_buy_ins as i64
    }
}
