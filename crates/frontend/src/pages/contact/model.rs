use super::flow::SubmitError;
use crate::shared::api_utils::{api_url, with_timeout};
use contracts::contact::{ContactReceipt, ContactRejection, ContactSubmission};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Upper bound for one submission round trip
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

/// How long a failure notice stays on screen
pub const FAILURE_NOTICE_MS: u32 = 6_000;

/// POST the form to `/api/contact`
pub async fn submit_contact(form: &ContactSubmission) -> Result<ContactReceipt, SubmitError> {
    with_timeout(post_contact(form), TimeoutFuture::new(SUBMIT_TIMEOUT_MS)).await
}

async fn post_contact(form: &ContactSubmission) -> Result<ContactReceipt, SubmitError> {
    let response = Request::post(&api_url("/api/contact"))
        .json(form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 422 {
        let rejection = response
            .json::<ContactRejection>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;
        return Err(SubmitError::Rejected(rejection.errors));
    }

    if !response.ok() {
        return Err(format!("Submission failed: {}", response.status()).into());
    }

    response
        .json::<ContactReceipt>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e).into())
}
