//! Order types for the planning phase.
//!
//! An order is a bot's declared action for one of its locations in a turn.
//! Orders are immutable value objects compared by structural equality
//! (type, origin, target, issuer).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The action class of an order.
///
/// Only `March`, `Support`, and `Defend` are produced by the legal-order
/// generator; `Raid` and `ConsolidatePower` are reserved for future
/// executors and round-trip through order data unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    March,
    Support,
    Defend,
    Raid,
    ConsolidatePower,
}

impl OrderType {
    /// Returns the lowercase display label.
    pub const fn label(self) -> &'static str {
        match self {
            OrderType::March => "march",
            OrderType::Support => "support",
            OrderType::Defend => "defend",
            OrderType::Raid => "raid",
            OrderType::ConsolidatePower => "consolidate power",
        }
    }
}

/// A bot's declared action for one location.
///
/// `target` is required for `March` and `Support`, absent for `Defend`.
/// The constructors enforce that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub order_type: OrderType,
    pub location: String,
    pub target: Option<String>,
    pub bot_id: String,
}

impl Order {
    /// A march from `location` into the adjacent `target`.
    pub fn march(
        bot_id: impl Into<String>,
        location: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Order {
            order_type: OrderType::March,
            location: location.into(),
            target: Some(target.into()),
            bot_id: bot_id.into(),
        }
    }

    /// A support from `location` for the adjacent friendly `target`.
    pub fn support(
        bot_id: impl Into<String>,
        location: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Order {
            order_type: OrderType::Support,
            location: location.into(),
            target: Some(target.into()),
            bot_id: bot_id.into(),
        }
    }

    /// A hold-position order at `location`.
    pub fn defend(bot_id: impl Into<String>, location: impl Into<String>) -> Self {
        Order {
            order_type: OrderType::Defend,
            location: location.into(),
            target: None,
            bot_id: bot_id.into(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(
                f,
                "{}: {} from {} to {}",
                self.bot_id,
                self.order_type.label(),
                self.location,
                target
            ),
            None => write!(
                f,
                "{}: {} at {}",
                self.bot_id,
                self.order_type.label(),
                self.location
            ),
        }
    }
}
