//! Success and failure paths of three distributed transaction patterns

use crate::frames::ServiceStatus::{Active, Error, Idle, Success};
use crate::frames::{
    Outcome, Scenario, ServiceBox, ServiceStatus, TransactionFrame, TransactionPattern,
};

const fn service(id: &'static str, status: ServiceStatus, data: &'static str) -> ServiceBox {
    ServiceBox { id, status, data }
}

pub static CHOREOGRAPHY: [TransactionFrame; 4] = [
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("order", Active, "Create Order"),
            service("payment", Idle, ""),
            service("inventory", Idle, ""),
            service("shipping", Idle, ""),
        ],
        action: "Order Service initiates the transaction by creating an order and publishing an event.",
        events: &["OrderCreated"],
        step_label: "1",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("order", Success, "Order Created"),
            service("payment", Active, "Process Payment"),
            service("inventory", Idle, ""),
            service("shipping", Idle, ""),
        ],
        action: "Payment Service receives OrderCreated event and processes payment.",
        events: &["OrderCreated", "PaymentProcessed"],
        step_label: "2",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("order", Success, "Order Created"),
            service("payment", Success, "Payment Processed"),
            service("inventory", Active, "Reserve Items"),
            service("shipping", Idle, ""),
        ],
        action: "Inventory Service receives PaymentProcessed event and reserves items.",
        events: &["PaymentProcessed", "ItemsReserved"],
        step_label: "3",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("order", Success, "Order Created"),
            service("payment", Success, "Payment Processed"),
            service("inventory", Success, "Items Reserved"),
            service("shipping", Active, "Create Shipment"),
        ],
        action: "Shipping Service receives ItemsReserved event and creates shipment.",
        events: &["ItemsReserved", "ShipmentCreated"],
        step_label: "4",
    },
];

pub static CHOREOGRAPHY_FAILURE: [TransactionFrame; 2] = [
    TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            service("order", Success, "Order Created"),
            service("payment", Error, "Payment Failed"),
            service("inventory", Idle, ""),
            service("shipping", Idle, ""),
        ],
        action: "Payment Service fails to process payment. Publishes PaymentFailed event.",
        events: &["OrderCreated", "PaymentFailed"],
        step_label: "Error",
    },
    TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            service("order", Active, "Cancelling Order"),
            service("payment", Error, "Payment Failed"),
            service("inventory", Idle, ""),
            service("shipping", Idle, ""),
        ],
        action: "Order Service receives PaymentFailed event and initiates compensating transaction.",
        events: &["PaymentFailed", "OrderCancelled"],
        step_label: "Rollback",
    },
];

pub static ORCHESTRATION: [TransactionFrame; 3] = [
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("orchestrator", Active, "Start Process"),
            service("order", Idle, ""),
            service("payment", Idle, ""),
            service("inventory", Idle, ""),
        ],
        action: "Orchestrator initiates the transaction process.",
        events: &[],
        step_label: "1",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("orchestrator", Active, "Monitoring"),
            service("order", Active, "Create Order"),
            service("payment", Idle, ""),
            service("inventory", Idle, ""),
        ],
        action: "Orchestrator calls Order Service to create order.",
        events: &[],
        step_label: "2",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("orchestrator", Active, "Monitoring"),
            service("order", Success, "Order Created"),
            service("payment", Active, "Process Payment"),
            service("inventory", Idle, ""),
        ],
        action: "Orchestrator receives success from Order Service, calls Payment Service.",
        events: &[],
        step_label: "3",
    },
];

pub static ORCHESTRATION_FAILURE: [TransactionFrame; 2] = [
    TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            service("orchestrator", Active, "Error Detected"),
            service("order", Success, "Order Created"),
            service("payment", Error, "Payment Failed"),
            service("inventory", Idle, ""),
        ],
        action: "Payment Service fails. Orchestrator detects failure and initiates rollback.",
        events: &[],
        step_label: "Error",
    },
    TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            service("orchestrator", Active, "Rolling Back"),
            service("order", Active, "Cancelling Order"),
            service("payment", Error, "Payment Failed"),
            service("inventory", Idle, ""),
        ],
        action: "Orchestrator executes compensation workflow to cancel order.",
        events: &[],
        step_label: "Rollback",
    },
];

pub static TWO_PHASE_COMMIT: [TransactionFrame; 3] = [
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("coordinator", Active, "Prepare Phase"),
            service("order", Idle, ""),
            service("payment", Idle, ""),
            service("inventory", Idle, ""),
        ],
        action: "Transaction Coordinator starts the prepare phase.",
        events: &[],
        step_label: "1",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("coordinator", Active, "Prepare Phase"),
            service("order", Active, "Prepared"),
            service("payment", Active, "Prepared"),
            service("inventory", Active, "Prepared"),
        ],
        action: "All services prepare their local transactions and vote.",
        events: &[],
        step_label: "2",
    },
    TransactionFrame {
        outcome: Outcome::Success,
        services: &[
            service("coordinator", Active, "Commit Phase"),
            service("order", Success, "Committed"),
            service("payment", Success, "Committed"),
            service("inventory", Success, "Committed"),
        ],
        action: "Coordinator receives all votes and initiates commit phase.",
        events: &[],
        step_label: "3",
    },
];

pub static TWO_PHASE_COMMIT_FAILURE: [TransactionFrame; 2] = [
    TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            service("coordinator", Active, "Prepare Phase"),
            service("order", Success, "Prepared"),
            service("payment", Error, "Prepare Failed"),
            service("inventory", Success, "Prepared"),
        ],
        action: "Payment Service votes NO during prepare phase.",
        events: &[],
        step_label: "Error",
    },
    TransactionFrame {
        outcome: Outcome::Error,
        services: &[
            service("coordinator", Active, "Abort Phase"),
            service("order", Active, "Rolling Back"),
            service("payment", Error, "Aborted"),
            service("inventory", Active, "Rolling Back"),
        ],
        action: "Coordinator initiates global abort, all services roll back their local transactions.",
        events: &[],
        step_label: "Rollback",
    },
];

/// Frames for one pattern and scenario
pub fn frames(pattern: TransactionPattern, scenario: Scenario) -> &'static [TransactionFrame] {
    match (pattern, scenario) {
        (TransactionPattern::Choreography, Scenario::Success) => &CHOREOGRAPHY,
        (TransactionPattern::Choreography, Scenario::Error) => &CHOREOGRAPHY_FAILURE,
        (TransactionPattern::Orchestration, Scenario::Success) => &ORCHESTRATION,
        (TransactionPattern::Orchestration, Scenario::Error) => &ORCHESTRATION_FAILURE,
        (TransactionPattern::TwoPhaseCommit, Scenario::Success) => &TWO_PHASE_COMMIT,
        (TransactionPattern::TwoPhaseCommit, Scenario::Error) => &TWO_PHASE_COMMIT_FAILURE,
    }
}
