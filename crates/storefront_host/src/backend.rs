//! Remote backend gateway contract.
//!
//! The storefront operates entirely from local state; orders and newsletter
//! signups are *offered* to a backend through this gateway but the store never
//! depends on the calls succeeding. The wire contract is the
//! `{success, data|error}` envelope used by the original service layer. Only
//! [`NoopBackendGateway`] ships; a real transport would implement
//! [`BackendGateway`] against it.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object-safe boxed future used by [`BackendGateway`] methods.
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Response envelope returned by every backend call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendEnvelope {
    /// Whether the remote call succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human-readable failure reason on error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackendEnvelope {
    /// Builds a success envelope with a payload.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Builds a failure envelope with a reason.
    pub fn err(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(reason.into()),
        }
    }
}

/// Order payload offered to the backend at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    /// Customer name.
    pub name: String,
    /// Customer phone.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Shipping city.
    pub city: String,
    /// Line items as (name, unit price, quantity).
    pub lines: Vec<(String, f64, u32)>,
    /// Grand total after discount and shipping.
    pub total: f64,
}

/// Newsletter signup payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    /// Subscriber email.
    pub email: String,
}

/// Host gateway for the (mocked) remote storefront backend.
pub trait BackendGateway {
    /// Offers an order to the backend.
    fn submit_order<'a>(
        &'a self,
        order: &'a OrderSubmission,
    ) -> BackendFuture<'a, BackendEnvelope>;

    /// Offers a newsletter signup to the backend.
    fn subscribe_newsletter<'a>(
        &'a self,
        signup: &'a NewsletterSignup,
    ) -> BackendFuture<'a, BackendEnvelope>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Gateway that acknowledges every call locally without any transport.
pub struct NoopBackendGateway;

impl BackendGateway for NoopBackendGateway {
    fn submit_order<'a>(
        &'a self,
        order: &'a OrderSubmission,
    ) -> BackendFuture<'a, BackendEnvelope> {
        let reference = format!("local-{}", crate::time::mint_record_id());
        let _ = order;
        Box::pin(async move { BackendEnvelope::ok(serde_json::json!({ "reference": reference })) })
    }

    fn subscribe_newsletter<'a>(
        &'a self,
        _signup: &'a NewsletterSignup,
    ) -> BackendFuture<'a, BackendEnvelope> {
        Box::pin(async { BackendEnvelope::ok(Value::Null) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn envelope_serializes_without_empty_fields() {
        let ok = BackendEnvelope::ok(serde_json::json!({"id": 1}));
        let raw = serde_json::to_string(&ok).expect("serialize");
        assert!(raw.contains("\"success\":true"));
        assert!(!raw.contains("error"));

        let err = BackendEnvelope::err("offline");
        let raw = serde_json::to_string(&err).expect("serialize");
        assert!(raw.contains("\"error\":\"offline\""));
        assert!(!raw.contains("data"));
    }

    #[test]
    fn envelope_round_trips() {
        let env = BackendEnvelope::err("minimum not met");
        let raw = serde_json::to_string(&env).expect("serialize");
        let back: BackendEnvelope = serde_json::from_str(&raw).expect("parse");
        assert_eq!(back, env);
    }

    #[test]
    fn noop_gateway_acknowledges_orders() {
        let gateway = NoopBackendGateway;
        let order = OrderSubmission {
            name: "Test".to_string(),
            phone: "0500000000".to_string(),
            address: "1 Main St".to_string(),
            city: "Riyadh".to_string(),
            lines: vec![("Sofa".to_string(), 2799.0, 1)],
            total: 2799.0,
        };
        let envelope = block_on(gateway.submit_order(&order));
        assert!(envelope.success);
        assert!(envelope.data.is_some());
    }
}
