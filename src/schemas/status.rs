//! Status and stage labels for opportunities

use serde::{Deserialize, Serialize};

/// Lifecycle status of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityStatus {
    /// Entry state for every new opportunity
    #[serde(rename = "Open")]
    Open,
    #[serde(rename = "Negotiating")]
    Negotiating,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    #[serde(rename = "Won")]
    Won,
    #[serde(rename = "Lost")]
    Lost,
    #[serde(rename = "On Hold")]
    OnHold,
    /// Terminal
    #[serde(rename = "Closed")]
    Closed,
    /// Terminal, handed over to the sales request pipeline
    #[serde(rename = "Won - Converted to Sales Request")]
    WonConverted,
    /// Reached from `On Hold`; has no onward transitions of its own
    #[serde(rename = "Follow-up with Customer")]
    FollowUpWithCustomer,
}

impl OpportunityStatus {
    /// The exact label used on the wire and in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityStatus::Open => "Open",
            OpportunityStatus::Negotiating => "Negotiating",
            OpportunityStatus::ProposalSent => "Proposal Sent",
            OpportunityStatus::Won => "Won",
            OpportunityStatus::Lost => "Lost",
            OpportunityStatus::OnHold => "On Hold",
            OpportunityStatus::Closed => "Closed",
            OpportunityStatus::WonConverted => "Won - Converted to Sales Request",
            OpportunityStatus::FollowUpWithCustomer => "Follow-up with Customer",
        }
    }
}

impl std::fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for OpportunityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(OpportunityStatus::Open),
            "Negotiating" => Ok(OpportunityStatus::Negotiating),
            "Proposal Sent" => Ok(OpportunityStatus::ProposalSent),
            "Won" => Ok(OpportunityStatus::Won),
            "Lost" => Ok(OpportunityStatus::Lost),
            "On Hold" => Ok(OpportunityStatus::OnHold),
            "Closed" => Ok(OpportunityStatus::Closed),
            "Won - Converted to Sales Request" => Ok(OpportunityStatus::WonConverted),
            "Follow-up with Customer" => Ok(OpportunityStatus::FollowUpWithCustomer),
            _ => Err(format!("Unknown opportunity status: {}", s)),
        }
    }
}

/// Status as stored on a record.
///
/// Files edited outside oppflow may carry labels this build does not know.
/// Those are kept verbatim so the record still loads; it simply offers no
/// transitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedStatus {
    Known(OpportunityStatus),
    Unrecognized(String),
}

impl RecordedStatus {
    /// The status, if its label is one this build knows
    pub fn known(&self) -> Option<OpportunityStatus> {
        match self {
            RecordedStatus::Known(status) => Some(*status),
            RecordedStatus::Unrecognized(_) => None,
        }
    }

    /// The label exactly as stored
    pub fn label(&self) -> &str {
        match self {
            RecordedStatus::Known(status) => status.label(),
            RecordedStatus::Unrecognized(label) => label,
        }
    }
}

impl From<OpportunityStatus> for RecordedStatus {
    fn from(status: OpportunityStatus) -> Self {
        RecordedStatus::Known(status)
    }
}

impl std::fmt::Display for RecordedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Coarse pipeline phase recorded alongside a status change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Engagement,
    Decision,
    Closure,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Stage::Engagement => "Engagement",
            Stage::Decision => "Decision",
            Stage::Closure => "Closure",
        })
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Engagement" => Ok(Stage::Engagement),
            "Decision" => Ok(Stage::Decision),
            "Closure" => Ok(Stage::Closure),
            _ => Err(format!("Unknown stage: {}", s)),
        }
    }
}

/// A legal destination: the next status and the stage recorded with it.
///
/// Only the lifecycle table in `domain` constructs these, so a status can
/// never be paired with a stage of the caller's choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Transition {
    status: OpportunityStatus,
    stage: Stage,
}

impl Transition {
    pub(crate) const fn new(status: OpportunityStatus, stage: Stage) -> Self {
        Transition { status, stage }
    }

    /// The status this transition leads to
    pub fn status(&self) -> OpportunityStatus {
        self.status
    }

    /// The stage recorded when this transition is taken
    pub fn stage(&self) -> Stage {
        self.stage
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.status, self.stage)
    }
}
