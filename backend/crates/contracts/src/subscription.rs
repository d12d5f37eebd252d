//! Subscription contracts

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{Extra, Id};

pub const BILLING_CYCLES: &[&str] = &["monthly", "yearly"];

/// Plan offered to brands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A brand's subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// POST /api/v0/subscriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl CreateSubscriptionRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.plan_id.as_ref().is_none_or(Id::is_blank) {
            return Err(AppError::bad_request("plan_id is required"));
        }
        match self.billing_cycle.as_deref() {
            Some(cycle) if !BILLING_CYCLES.contains(&cycle) => Err(AppError::bad_request(
                format!(
                    "Invalid billing_cycle '{cycle}'. Must be one of: {}",
                    BILLING_CYCLES.join(", ")
                ),
            )),
            _ => Ok(()),
        }
    }
}

/// POST /api/v0/subscriptions/{id}/cancel - body is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CancelSubscriptionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
