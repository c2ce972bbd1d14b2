//! Weapon tiers and the per-session weapon progression.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponTier {
    pub name: &'static str,
    /// Minimum gap between two shots.
    pub fire_rate: Duration,
    /// Screen-space vertical speed; negative travels up.
    pub bullet_speed: f32,
    /// Score at which this tier unlocks.
    pub unlock_cost: u32,
}

/// Ordered by strictly increasing unlock cost.
pub const TIERS: [WeaponTier; 4] = [
    WeaponTier {
        name: "Basic Gun",
        fire_rate: Duration::from_millis(300),
        bullet_speed: -400.0,
        unlock_cost: 0,
    },
    WeaponTier {
        name: "Double Shot",
        fire_rate: Duration::from_millis(250),
        bullet_speed: -500.0,
        unlock_cost: 50,
    },
    WeaponTier {
        name: "Rapid Fire",
        fire_rate: Duration::from_millis(150),
        bullet_speed: -600.0,
        unlock_cost: 150,
    },
    WeaponTier {
        name: "Laser Beam",
        fire_rate: Duration::from_millis(50),
        bullet_speed: -800.0,
        unlock_cost: 400,
    },
];

/// Threshold used once the last tier is equipped.
pub const UNREACHABLE_UNLOCK: u32 = u32::MAX;

/// Current tier, next unlock threshold and fire gate.
///
/// The tier index only moves forward; a fresh `Arsenal` is the only way back to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Arsenal {
    index: usize,
    next_unlock: u32,
    next_fire_at: Duration,
}

impl Default for Arsenal {
    fn default() -> Self {
        Self {
            index: 0,
            next_unlock: unlock_after(0),
            next_fire_at: Duration::ZERO,
        }
    }
}

fn unlock_after(index: usize) -> u32 {
    TIERS
        .get(index + 1)
        .map_or(UNREACHABLE_UNLOCK, |t| t.unlock_cost)
}

impl Arsenal {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn tier(&self) -> &'static WeaponTier {
        &TIERS[self.index]
    }

    #[inline]
    pub fn next_unlock(&self) -> u32 {
        self.next_unlock
    }

    #[inline]
    pub fn is_maxed(&self) -> bool {
        self.index == TIERS.len() - 1
    }

    /// Advance at most one tier if `score` reached the threshold.
    /// Returns the newly equipped tier.
    pub fn try_unlock(&mut self, score: u32) -> Option<&'static WeaponTier> {
        if self.is_maxed() || score < self.next_unlock {
            return None;
        }
        self.index += 1;
        self.next_unlock = unlock_after(self.index);
        Some(self.tier())
    }

    /// Firing is allowed strictly after the stamp.
    #[inline]
    pub fn can_fire(&self, now: Duration) -> bool {
        now > self.next_fire_at
    }

    #[inline]
    pub fn hold_fire_until(&mut self, at: Duration) {
        self.next_fire_at = at;
    }

    #[inline]
    pub fn next_fire_at(&self) -> Duration {
        self.next_fire_at
    }
}
