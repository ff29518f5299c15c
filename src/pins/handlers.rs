use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, post, put},
    Json, Router,
};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::state::AppState;

use super::dto::{
    CreatePinRequest, DeletePinRequest, EditPinRequest, ErrorBody, PinCreated, PinListItem,
    PinMessage,
};
use super::repo::{self, PinError};

pub fn pin_routes() -> Router<AppState> {
    Router::new()
        .route("/pins", post(add_pin).get(get_pins))
        .route("/pins/edit", put(edit_pin))
        .route("/pins/:pin_id", delete(delete_pin))
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn error_body(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

#[instrument(skip(state, body))]
pub async fn add_pin(
    State(state): State<AppState>,
    Json(body): Json<CreatePinRequest>,
) -> Result<(StatusCode, Json<PinCreated>), ApiError> {
    let pin = repo::insert(
        &state.db,
        &body.user_email,
        &body.title,
        &body.description,
        body.lat,
        body.lng,
    )
    .await
    .map_err(|e| {
        error!(error = %e, "add pin failed");
        error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to add pin")
    })?;

    info!(pin_id = %pin.id, "pin created");
    Ok((
        StatusCode::CREATED,
        Json(PinCreated {
            id: pin.id,
            message: "Pin added successfully".into(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_pins(
    State(state): State<AppState>,
) -> Result<Json<Vec<PinListItem>>, ApiError> {
    let pins = repo::list_all(&state.db).await.map_err(|e| {
        error!(error = %e, "list pins failed");
        error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch pins")
    })?;

    Ok(Json(pins.into_iter().map(PinListItem::from).collect()))
}

#[instrument(skip(state, body))]
pub async fn edit_pin(
    State(state): State<AppState>,
    Json(body): Json<EditPinRequest>,
) -> Result<Json<PinMessage>, ApiError> {
    repo::update_owned(
        &state.db,
        body.pin_id,
        &body.user_email,
        &body.title,
        &body.description,
        body.lat,
        body.lng,
    )
    .await
    .map_err(|e| edit_error(e, body.pin_id))?;

    info!(pin_id = %body.pin_id, "pin updated");
    Ok(Json(PinMessage {
        message: "Pin updated successfully".into(),
    }))
}

#[instrument(skip(state, body))]
pub async fn delete_pin(
    State(state): State<AppState>,
    Path(pin_id): Path<Uuid>,
    Json(body): Json<DeletePinRequest>,
) -> Result<Json<PinMessage>, ApiError> {
    repo::delete_owned(&state.db, pin_id, &body.user_email)
        .await
        .map_err(|e| delete_error(e, pin_id))?;

    info!(%pin_id, "pin deleted");
    Ok(Json(PinMessage {
        message: "Pin deleted successfully".into(),
    }))
}

fn edit_error(e: PinError, pin_id: Uuid) -> ApiError {
    match e {
        PinError::NotFound => error_body(StatusCode::NOT_FOUND, "Pin not found"),
        PinError::Forbidden => error_body(
            StatusCode::FORBIDDEN,
            "You cannot edit another user's pin",
        ),
        PinError::Db(e) => {
            error!(error = %e, %pin_id, "edit pin failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to edit pin")
        }
    }
}

fn delete_error(e: PinError, pin_id: Uuid) -> ApiError {
    match e {
        PinError::NotFound => error_body(StatusCode::NOT_FOUND, "Pin not found"),
        PinError::Forbidden => error_body(
            StatusCode::FORBIDDEN,
            "You cannot delete another user's pin",
        ),
        PinError::Db(e) => {
            error!(error = %e, %pin_id, "delete pin failed");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete pin")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_error_statuses() {
        let id = Uuid::new_v4();
        let (status, body) = edit_error(PinError::NotFound, id);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Pin not found");

        let (status, body) = edit_error(PinError::Forbidden, id);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error, "You cannot edit another user's pin");

        let (status, body) = edit_error(PinError::Db(sqlx::Error::PoolClosed), id);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to edit pin");
    }

    #[test]
    fn test_delete_error_statuses() {
        let id = Uuid::new_v4();
        let (status, body) = delete_error(PinError::Forbidden, id);
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error, "You cannot delete another user's pin");

        let (status, _) = delete_error(PinError::NotFound, id);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_confirmation_messages_serialize() {
        let created = PinCreated {
            id: Uuid::new_v4(),
            message: "Pin added successfully".into(),
        };
        let json = serde_json::to_string(&created).unwrap();
        assert!(json.contains("Pin added successfully"));
        assert!(json.contains("id"));
    }
}
