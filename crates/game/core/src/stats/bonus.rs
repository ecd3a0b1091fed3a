//! The museum bonus vector.
//!
//! [`MuseumBonuses`] holds one additive accumulator per [`Stat`]. Values are
//! multipliers expressed as fractions (`0.25` = +25%). During aggregation the
//! accumulators only ever grow; merging two vectors is plain addition, which
//! makes the aggregation an order-independent fold.

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use strum::IntoEnumIterator;

use super::Stat;

/// Aggregated museum bonuses, one field per stat.
///
/// # Example
/// ```
/// # use museum_core::stats::{MuseumBonuses, Stat};
/// let mut bonuses = MuseumBonuses::new();
/// bonuses.credit(Stat::Luck, 0.5);
/// bonuses.credit(Stat::Luck, 0.25);
/// assert_eq!(bonuses.luck, 0.75);
/// assert_eq!(bonuses.get(Stat::DigSpeed), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MuseumBonuses {
    pub luck: f64,
    pub dig_strength: f64,
    pub dig_speed: f64,
    pub shake_strength: f64,
    pub shake_speed: f64,
    pub capacity: f64,
    pub sell_boost: f64,
    pub size_boost: f64,
    pub modifier_boost: f64,
}

impl MuseumBonuses {
    /// All nine accumulators at zero.
    pub const fn new() -> Self {
        Self {
            luck: 0.0,
            dig_strength: 0.0,
            dig_speed: 0.0,
            shake_strength: 0.0,
            shake_speed: 0.0,
            capacity: 0.0,
            sell_boost: 0.0,
            size_boost: 0.0,
            modifier_boost: 0.0,
        }
    }

    /// Current value of one accumulator.
    pub const fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Luck => self.luck,
            Stat::DigStrength => self.dig_strength,
            Stat::DigSpeed => self.dig_speed,
            Stat::ShakeStrength => self.shake_strength,
            Stat::ShakeSpeed => self.shake_speed,
            Stat::Capacity => self.capacity,
            Stat::SellBoost => self.sell_boost,
            Stat::SizeBoost => self.size_boost,
            Stat::ModifierBoost => self.modifier_boost,
        }
    }

    fn slot_mut(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Luck => &mut self.luck,
            Stat::DigStrength => &mut self.dig_strength,
            Stat::DigSpeed => &mut self.dig_speed,
            Stat::ShakeStrength => &mut self.shake_strength,
            Stat::ShakeSpeed => &mut self.shake_speed,
            Stat::Capacity => &mut self.capacity,
            Stat::SellBoost => &mut self.sell_boost,
            Stat::SizeBoost => &mut self.size_boost,
            Stat::ModifierBoost => &mut self.modifier_boost,
        }
    }

    /// Adds `amount` to one accumulator.
    pub fn credit(&mut self, stat: Stat, amount: f64) {
        *self.slot_mut(stat) += amount;
    }

    /// Adds `amount` to each listed accumulator independently.
    pub fn credit_all(&mut self, stats: impl IntoIterator<Item = Stat>, amount: f64) {
        for stat in stats {
            self.credit(stat, amount);
        }
    }

    /// `(stat, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, f64)> + '_ {
        Stat::iter().map(|stat| (stat, self.get(stat)))
    }

    /// True when every accumulator is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|(_, value)| value == 0.0)
    }
}

impl AddAssign for MuseumBonuses {
    fn add_assign(&mut self, rhs: Self) {
        for (stat, value) in rhs.iter() {
            self.credit(stat, value);
        }
    }
}

impl Add for MuseumBonuses {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for MuseumBonuses {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

/// Renders a fractional multiplier as a signed percentage.
///
/// Up to two decimals are kept and trailing zeros are dropped.
///
/// ```
/// # use museum_core::stats::format_percent;
/// assert_eq!(format_percent(0.125), "+12.5%");
/// assert_eq!(format_percent(0.0), "+0%");
/// assert_eq!(format_percent(1.0), "+100%");
/// ```
pub fn format_percent(value: f64) -> String {
    let rendered = format!("{:.2}", value * 100.0);
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };

    if trimmed.starts_with('-') {
        format!("{trimmed}%")
    } else {
        format!("+{trimmed}%")
    }
}
