//! Distributed transaction patterns across a handful of services

use std::fmt;

use serde::Serialize;

use crate::view::FrameView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionPattern {
    Choreography,
    Orchestration,
    TwoPhaseCommit,
}

impl TransactionPattern {
    pub const ALL: [TransactionPattern; 3] = [
        TransactionPattern::Choreography,
        TransactionPattern::Orchestration,
        TransactionPattern::TwoPhaseCommit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransactionPattern::Choreography => "Choreography",
            TransactionPattern::Orchestration => "Orchestration",
            TransactionPattern::TwoPhaseCommit => "Distributed Transaction (2PC)",
        }
    }
}

impl fmt::Display for TransactionPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Success path or failure path of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Success,
    Error,
}

impl Scenario {
    pub fn label(self) -> &'static str {
        match self {
            Scenario::Success => "Success Scenario",
            Scenario::Error => "Error Scenario",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Idle,
    Active,
    Success,
    Error,
}

impl ServiceStatus {
    fn marker(self) -> &'static str {
        match self {
            ServiceStatus::Idle => " ",
            ServiceStatus::Active => "*",
            ServiceStatus::Success => "+",
            ServiceStatus::Error => "!",
        }
    }
}

/// One participant in the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceBox {
    pub id: &'static str,
    pub status: ServiceStatus,
    /// What the service is doing right now, empty when idle
    pub data: &'static str,
}

impl ServiceBox {
    /// Display name, the id with its first letter capitalized
    pub fn title(&self) -> String {
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Whether the frame belongs to the success or the failure path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionFrame {
    pub outcome: Outcome,
    pub services: &'static [ServiceBox],
    pub action: &'static str,
    /// Events on the bus, oldest first
    pub events: &'static [&'static str],
    /// Step label shown above the services ("1", "Error", "Rollback", ...)
    pub step_label: &'static str,
}

impl TransactionFrame {
    pub fn failed_services(&self) -> impl Iterator<Item = &'static ServiceBox> {
        self.services
            .iter()
            .filter(|service| service.status == ServiceStatus::Error)
    }
}

/// Failure and compensation events are highlighted on the event bus
pub fn event_is_failure(event: &str) -> bool {
    event.contains("Failed") || event.contains("Cancelled")
}

impl FrameView for TransactionFrame {
    fn caption(&self) -> &str {
        self.action
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Step {}", self.step_label)];
        lines.extend(self.services.iter().map(|service| {
            format!("[{}] {:<12} {}", service.status.marker(), service.title(), service.data)
                .trim_end()
                .to_string()
        }));

        if !self.events.is_empty() {
            let events: Vec<String> = self
                .events
                .iter()
                .map(|event| {
                    if event_is_failure(event) {
                        format!("!{}!", event)
                    } else {
                        event.to_string()
                    }
                })
                .collect();
            lines.push(format!("Event Bus: {}", events.join(", ")));
        }

        let failed: Vec<String> = self.failed_services().map(ServiceBox::title).collect();
        if !failed.is_empty() {
            lines.push(format!("Failed: {}", failed.join(", ")));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: TransactionFrame = TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            ServiceBox { id: "order", status: ServiceStatus::Active, data: "Cancelling Order" },
            ServiceBox { id: "payment", status: ServiceStatus::Error, data: "Payment Failed" },
            ServiceBox { id: "inventory", status: ServiceStatus::Idle, data: "" },
        ],
        action: "Order Service receives PaymentFailed event and initiates compensating transaction.",
        events: &["PaymentFailed", "OrderCancelled"],
        step_label: "Rollback",
    };

    #[test]
    fn test_event_is_failure() {
        assert!(event_is_failure("PaymentFailed"));
        assert!(event_is_failure("OrderCancelled"));
        assert!(!event_is_failure("OrderCreated"));
        assert!(!event_is_failure("ItemsReserved"));
    }

    #[test]
    fn test_service_title() {
        assert_eq!(FRAME.services[0].title(), "Order");
        let empty = ServiceBox { id: "", status: ServiceStatus::Idle, data: "" };
        assert_eq!(empty.title(), "");
    }

    #[test]
    fn test_failed_services() {
        let failed: Vec<_> = FRAME.failed_services().map(|service| service.id).collect();
        assert_eq!(failed, vec!["payment"]);
    }

    #[test]
    fn test_lines() {
        let lines = FRAME.lines();
        assert_eq!(lines[0], "Step Rollback");
        assert_eq!(lines[3], "[ ] Inventory");
        assert_eq!(lines[4], "Event Bus: !PaymentFailed!, !OrderCancelled!");
        assert_eq!(lines[5], "Failed: Payment");
        assert_eq!(lines.len(), 6);
    }
}
