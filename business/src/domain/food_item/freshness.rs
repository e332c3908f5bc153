use chrono::NaiveDate;

use super::model::FoodItem;
use crate::domain::shared::dates;

/// Expiry status tiers for a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryTier {
    /// Expiry date has passed.
    Expired,
    /// Due today or within the next 2 days.
    Urgent,
    /// Due in 3 to 7 days.
    Warning,
    /// More than 7 days left.
    Fresh,
}

impl ExpiryTier {
    pub const ALL: [ExpiryTier; 4] = [
        ExpiryTier::Expired,
        ExpiryTier::Urgent,
        ExpiryTier::Warning,
        ExpiryTier::Fresh,
    ];

    /// Fixed display color for the tier.
    ///
    /// List badges, the detail progress bar and the charts all read this
    /// mapping; none of them re-encode the thresholds.
    pub fn color(&self) -> &'static str {
        match self {
            ExpiryTier::Expired => "#f44336",
            ExpiryTier::Urgent => "#ff9800",
            ExpiryTier::Warning => "#ffca28",
            ExpiryTier::Fresh => "#4caf50",
        }
    }
}

impl std::fmt::Display for ExpiryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryTier::Expired => write!(f, "expired"),
            ExpiryTier::Urgent => write!(f, "urgent"),
            ExpiryTier::Warning => write!(f, "warning"),
            ExpiryTier::Fresh => write!(f, "fresh"),
        }
    }
}

const EXPIRING_SOON_DAYS: i64 = 7;

/// Maps a remaining-day count to its expiry tier.
///
/// Business rules:
/// - negative -> Expired
/// - 0-2 days -> Urgent
/// - 3-7 days -> Warning
/// - 8+ days -> Fresh
pub fn classify(days_remaining: i64) -> ExpiryTier {
    if days_remaining < 0 {
        ExpiryTier::Expired
    } else if days_remaining <= 2 {
        ExpiryTier::Urgent
    } else if days_remaining <= EXPIRING_SOON_DAYS {
        ExpiryTier::Warning
    } else {
        ExpiryTier::Fresh
    }
}

/// Days left until the item expires, seen from `today`.
///
/// Returns 0 for items due today, negative for expired items.
pub fn days_remaining(item: &FoodItem, today: NaiveDate) -> i64 {
    dates::days_remaining(item.expiry_date, today)
}

/// Tier of a single item as of `today`.
pub fn item_tier(item: &FoodItem, today: NaiveDate) -> ExpiryTier {
    classify(days_remaining(item, today))
}

/// True when the item is due within the expiring-soon window (0-7 days, not expired).
pub fn is_expiring_soon(item: &FoodItem, today: NaiveDate) -> bool {
    (0..=EXPIRING_SOON_DAYS).contains(&days_remaining(item, today))
}
