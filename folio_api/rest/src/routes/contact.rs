use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactSendMessageError, ContactService};

use super::{error, internal_server_error};
use crate::models::contact::{ApiContactConfirmation, ApiContactSubmission};

const CONFIRMATION: &str = "Su mensaje ha sido envíado con éxito. Gracias por contactarse!";

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    Json(submission): Json<ApiContactSubmission>,
) -> Response {
    match service.send_message(submission.into()).await {
        Ok(()) => Json(ApiContactConfirmation { msg: CONFIRMATION }).into_response(),
        Err(ContactSendMessageError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}

#[cfg(test)]
mod tests {
    use folio_core_contact_contracts::MockContactService;
    use folio_models::contact::ContactSubmission;

    use super::*;

    fn payload() -> ApiContactSubmission {
        ApiContactSubmission {
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            subject: Some("Consulta".into()),
            other_subject: None,
            message: Some("Hola".into()),
        }
    }

    fn submission() -> ContactSubmission {
        payload().into()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactService::new().with_send_message(submission(), Ok(()));

        // Act
        let response = send_message(State(Arc::new(service)), Json(payload())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "msg": "Su mensaje ha sido envíado con éxito. Gracias por contactarse!"
            })
        );
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let service = MockContactService::new()
            .with_send_message(submission(), Err(ContactSendMessageError::Send));

        // Act
        let response = send_message(State(Arc::new(service)), Json(payload())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "Could not send message"})
        );
    }

    #[tokio::test]
    async fn transport_error() {
        // Arrange
        let service = MockContactService::new().with_send_message(
            submission(),
            Err(ContactSendMessageError::Other(anyhow::anyhow!(
                "smtp unreachable"
            ))),
        );

        // Act
        let response = send_message(State(Arc::new(service)), Json(payload())).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": "Internal server error"})
        );
    }
}
