//! Opportunity schema - The sales pipeline record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OpportunityStatus, RecordedStatus, Stage, Transition};

/// A product line quoted on an opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product or service name
    pub product: String,

    /// Quantity quoted
    pub quantity: u32,

    /// Price per unit
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(product: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        LineItem {
            product: product.into(),
            quantity,
            unit_price,
        }
    }

    /// Quantity times unit price
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// One entry of an opportunity's status history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageChange {
    pub from: OpportunityStatus,
    pub to: OpportunityStatus,
    pub stage: Stage,

    /// ISO 8601 timestamp of the change
    pub changed_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A sales opportunity moving through the lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    /// Unique identifier (e.g. "OPP-0001")
    pub id: String,

    /// Customer the opportunity is for
    pub customer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesperson: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<NaiveDate>,

    #[serde(default)]
    pub line_items: Vec<LineItem>,

    status: RecordedStatus,

    /// Stage of the transition that produced `status`; absent while `Open`
    #[serde(default)]
    stage: Option<Stage>,

    #[serde(default)]
    history: Vec<StageChange>,

    /// ISO 8601 creation timestamp
    pub created_at: String,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Opportunity {
    /// Create a new opportunity in the `Open` status
    pub fn new(id: String, customer: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Opportunity {
            schema_version: 1,
            id,
            customer,
            salesperson: None,
            remarks: None,
            expected_close_date: None,
            line_items: Vec::new(),
            status: RecordedStatus::Known(OpportunityStatus::Open),
            stage: None,
            history: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Current status, or `None` when the stored label is unrecognized
    pub fn status(&self) -> Option<OpportunityStatus> {
        self.status.known()
    }

    /// Current status label exactly as stored
    pub fn status_label(&self) -> &str {
        self.status.label()
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Every transition applied so far, oldest first
    pub fn history(&self) -> &[StageChange] {
        &self.history
    }

    /// Sum of all line item totals
    pub fn total_value(&self) -> f64 {
        self.line_items.iter().map(LineItem::total).sum()
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    pub fn with_salesperson(mut self, salesperson: Option<String>) -> Self {
        self.salesperson = salesperson;
        self.touch_returning()
    }

    pub fn with_remarks(mut self, remarks: Option<String>) -> Self {
        self.remarks = remarks;
        self.touch_returning()
    }

    pub fn with_expected_close_date(mut self, date: Option<NaiveDate>) -> Self {
        self.expected_close_date = date;
        self.touch_returning()
    }

    pub fn with_line_item(mut self, line_item: LineItem) -> Self {
        self.line_items.push(line_item);
        self.touch_returning()
    }

    /// Move to the transition's status and stage, recording the change.
    ///
    /// Callers go through `domain::apply_transition`, which checks that the
    /// current status is known and the transition is legal from it.
    pub(crate) fn with_transition(
        mut self,
        from: OpportunityStatus,
        transition: Transition,
        note: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        self.history.push(StageChange {
            from,
            to: transition.status(),
            stage: transition.stage(),
            changed_at: now.clone(),
            note,
        });
        self.status = transition.status().into();
        self.stage = Some(transition.stage());
        self.updated_at = now;
        self
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}
