use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config;
use crate::contact::validation::{validate, ContactForm, ContactRequest, FieldError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Please fix the highlighted fields")]
    Invalid(Vec<FieldError>),
    #[error("Could not prepare your request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub reference: String,
    pub request: ContactRequest,
}

/// Short, human-readable reference derived from the request contents and time.
pub fn reference_for(request: &ContactRequest, timestamp_ms: f64) -> String {
    let mut hash: u32 = 2_166_136_261;
    for byte in request.email.bytes().chain(request.name.bytes()) {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(16_777_619);
    }
    let stamp = (timestamp_ms as u64 / 1000) as u32;
    format!("BW-{:08X}", hash ^ stamp)
}

/// There is no backend: after a short delay every valid request succeeds.
pub async fn submit(form: ContactForm) -> Result<SubmitReceipt, SubmitError> {
    let request = validate(&form).map_err(SubmitError::Invalid)?;
    let payload =
        serde_json::to_string(&request).map_err(|e| SubmitError::Encode(e.to_string()))?;
    log::debug!("Simulating contact submission: {}", payload);

    TimeoutFuture::new(config::SIMULATED_SUBMIT_DELAY_MS).await;

    let reference = reference_for(&request, crate::utils::timing::now_ms());
    log::info!("Contact request {} accepted ({})", reference, request.service.slug());
    Ok(SubmitReceipt { reference, request })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::Service;
    use pretty_assertions::assert_eq;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: None,
            service: Service::Standard,
            message: "Weekly clean please".to_string(),
        }
    }

    #[test]
    fn reference_is_stable_for_same_input() {
        let a = reference_for(&request(), 1_700_000_000_000.0);
        let b = reference_for(&request(), 1_700_000_000_400.0);
        assert_eq!(a, b);
        assert!(a.starts_with("BW-"));
        assert_eq!(a.len(), 11);
    }

    #[test]
    fn reference_changes_with_sender() {
        let other = ContactRequest {
            email: "sam@example.com".to_string(),
            ..request()
        };
        assert_ne!(
            reference_for(&request(), 1_700_000_000_000.0),
            reference_for(&other, 1_700_000_000_000.0)
        );
    }

    #[test]
    fn invalid_error_message() {
        let err = SubmitError::Invalid(vec![FieldError::MissingName]);
        assert_eq!(err.to_string(), "Please fix the highlighted fields");
    }
}
