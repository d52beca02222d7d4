use crate::booking::{BookingError, CatalogError, RepositoryError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogError),
    Booking(BookingError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Booking(err) => booking_status(err),
            AppError::Catalog(CatalogError::Booking(err)) => booking_status(err),
            AppError::Catalog(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn booking_status(err: &BookingError) -> StatusCode {
    match err {
        BookingError::HotelAlreadyExists(_)
        | BookingError::EmployeeAlreadyExists(_)
        | BookingError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        BookingError::UnknownHotel(_)
        | BookingError::HotelNotFound
        | BookingError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        BookingError::RoomTypeNotProvided
        | BookingError::PolicyViolation
        | BookingError::NoRoomsAvailable
        | BookingError::Stay(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Booking(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Booking(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<BookingError> for AppError {
    fn from(value: BookingError) -> Self {
        Self::Booking(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::Id;

    #[test]
    fn booking_errors_map_to_client_statuses() {
        let conflict = AppError::from(BookingError::HotelAlreadyExists(Id::new("h-1")));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(conflict.to_string(), "Hotel h-1 already exists");

        let raced = AppError::from(BookingError::Repository(RepositoryError::Conflict));
        assert_eq!(raced.status_code(), StatusCode::CONFLICT);

        let missing = AppError::from(BookingError::HotelNotFound);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let full = AppError::from(BookingError::NoRoomsAvailable);
        assert_eq!(full.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let offline = AppError::from(BookingError::Repository(RepositoryError::Unavailable(
            "offline".to_string(),
        )));
        assert_eq!(offline.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
