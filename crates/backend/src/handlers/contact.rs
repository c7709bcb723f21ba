use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use contracts::contact::{ContactReceipt, ContactRejection, ContactSubmission};
use uuid::Uuid;

/// POST /api/contact
///
/// Validates the inquiry and acknowledges it with a reference id.
/// Invalid submissions get 422 with every failing field.
pub async fn submit(
    Json(payload): Json<ContactSubmission>,
) -> Result<Json<ContactReceipt>, (StatusCode, Json<ContactRejection>)> {
    let submission = payload.normalized();

    if let Err(errors) = submission.validate() {
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        tracing::warn!(
            "Contact submission rejected, invalid fields: {}",
            fields.join(", ")
        );
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ContactRejection { errors }),
        ));
    }

    let receipt = ContactReceipt {
        reference: Uuid::new_v4().to_string(),
        received_at: Utc::now().to_rfc3339(),
    };

    tracing::info!(
        reference = %receipt.reference,
        company = %submission.company,
        email = %submission.email,
        role = submission.role.as_deref().unwrap_or("-"),
        message_chars = submission.message.chars().count(),
        "Contact request received from {}",
        submission.name
    );

    Ok(Json(receipt))
}
