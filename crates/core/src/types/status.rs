//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Order status.
///
/// A closed set of states rather than free text. Today there is exactly one
/// legal state: every committed order is `Placed` and stays `Placed`. New
/// states (cancelled, fulfilled, ...) would be added here as variants along
/// with their legal transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
}

impl OrderStatus {
    /// Get the status as its stored text form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Placed => "placed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text() {
        let status: OrderStatus = "placed".parse().expect("valid status");
        assert_eq!(status, OrderStatus::Placed);
        assert_eq!(status.to_string(), "placed");
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("cancelled".parse::<OrderStatus>().is_err());
    }
}
