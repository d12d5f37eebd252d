//! Price negotiation contracts

use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id, require_positive};

/// Negotiation round as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceNegotiation {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_influencer_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v0/campaign-influencers/{id}/price-negotiations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterOfferRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CounterOfferRequest {
    pub fn validate(&self) -> AppResult<()> {
        let price = self
            .proposed_price
            .ok_or_else(|| AppError::bad_request("proposed_price is required"))?;
        require_positive("proposed_price", price)
    }
}

/// Decision on a proposed price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceApprovalAction {
    Approve,
    Reject,
}

impl PriceApprovalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceApprovalAction::Approve => "approve",
            PriceApprovalAction::Reject => "reject",
        }
    }
}

impl FromStr for PriceApprovalAction {
    type Err = AppError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(PriceApprovalAction::Approve),
            "reject" => Ok(PriceApprovalAction::Reject),
            _ => Err(AppError::bad_request(
                "Invalid action. Must be 'approve' or 'reject'",
            )),
        }
    }
}

/// POST /api/v0/campaign-influencers/{id}/price-approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceApprovalRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl PriceApprovalRequest {
    pub fn validate(&self) -> AppResult<PriceApprovalAction> {
        self.action.parse()
    }
}
