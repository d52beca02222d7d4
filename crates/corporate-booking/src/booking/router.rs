use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::desk::BookingDesk;
use super::domain::{Booking, Employee, Hotel, Id, RoomNumber, RoomType};
use super::error::BookingError;
use super::repository::{BookingRepository, CompanyRepository, HotelRepository, PolicyRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHotel {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAssignment {
    pub room_type: RoomType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: Id,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyUpdate {
    pub allowed_room_types: Vec<RoomType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub employee_id: Id,
    pub hotel_id: Id,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

type SharedDesk<H, C, P, B> = Arc<BookingDesk<H, C, P, B>>;

/// Router builder exposing the booking desk over HTTP.
pub fn booking_router<H, C, P, B>(desk: SharedDesk<H, C, P, B>) -> Router
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    Router::new()
        .route("/api/v1/hotels", post(create_hotel_handler::<H, C, P, B>))
        .route("/api/v1/hotels/:hotel_id", get(hotel_handler::<H, C, P, B>))
        .route(
            "/api/v1/hotels/:hotel_id/rooms/:room_number",
            put(set_room_handler::<H, C, P, B>),
        )
        .route(
            "/api/v1/companies/:company_id/employees",
            post(add_employee_handler::<H, C, P, B>),
        )
        .route(
            "/api/v1/companies/:company_id/policy",
            put(company_policy_handler::<H, C, P, B>),
        )
        .route(
            "/api/v1/employees/:employee_id",
            delete(delete_employee_handler::<H, C, P, B>),
        )
        .route(
            "/api/v1/employees/:employee_id/policy",
            put(employee_policy_handler::<H, C, P, B>),
        )
        .route(
            "/api/v1/employees/:employee_id/bookings",
            get(employee_bookings_handler::<H, C, P, B>),
        )
        .route("/api/v1/bookings", post(book_handler::<H, C, P, B>))
        .with_state(desk)
}

pub(crate) async fn create_hotel_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Json(payload): Json<NewHotel>,
) -> Result<(StatusCode, Json<Hotel>), AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    let hotel = desk.hotels().add_hotel(payload.id, payload.name)?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

pub(crate) async fn hotel_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path(hotel_id): Path<String>,
) -> Result<Json<Hotel>, AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    let hotel = desk
        .hotels()
        .find_hotel_by(&Id::new(hotel_id))?
        .ok_or(BookingError::HotelNotFound)?;
    Ok(Json(hotel))
}

pub(crate) async fn set_room_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path((hotel_id, room_number)): Path<(String, RoomNumber)>,
    Json(payload): Json<RoomAssignment>,
) -> Result<StatusCode, AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    desk.hotels()
        .set_room(&Id::new(hotel_id), room_number, payload.room_type)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn add_employee_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path(company_id): Path<String>,
    Json(payload): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    let employee = desk
        .companies()
        .add_employee(Id::new(company_id), payload.employee_id)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub(crate) async fn delete_employee_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path(employee_id): Path<String>,
) -> Result<StatusCode, AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    desk.companies().delete_employee(&Id::new(employee_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn company_policy_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path(company_id): Path<String>,
    Json(payload): Json<PolicyUpdate>,
) -> Result<StatusCode, AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    desk.policies()
        .set_company_policy(Id::new(company_id), payload.allowed_room_types)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn employee_policy_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path(employee_id): Path<String>,
    Json(payload): Json<PolicyUpdate>,
) -> Result<StatusCode, AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    desk.policies()
        .set_employee_policy(Id::new(employee_id), payload.allowed_room_types)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn employee_bookings_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<Booking>>, AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    let bookings = desk.bookings().bookings_for(&Id::new(employee_id))?;
    Ok(Json(bookings))
}

pub(crate) async fn book_handler<H, C, P, B>(
    State(desk): State<SharedDesk<H, C, P, B>>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError>
where
    H: HotelRepository + 'static,
    C: CompanyRepository + 'static,
    P: PolicyRepository + 'static,
    B: BookingRepository + 'static,
{
    let BookingRequest {
        employee_id,
        hotel_id,
        room_type,
        check_in,
        check_out,
    } = request;

    let booking = desk
        .bookings()
        .book(employee_id, hotel_id, room_type, check_in, check_out)?;
    Ok((StatusCode::CREATED, Json(booking)))
}
