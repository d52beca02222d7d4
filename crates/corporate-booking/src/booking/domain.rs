use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier shared by hotels, companies, employees and bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

pub type RoomNumber = u32;

/// Room categories a hotel can offer and a policy can allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomType {
    Standard,
    JuniorSuite,
    MasterSuite,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::Standard,
        RoomType::JuniorSuite,
        RoomType::MasterSuite,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::JuniorSuite => "juniorSuite",
            RoomType::MasterSuite => "masterSuite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_number: RoomNumber,
    pub room_type: RoomType,
    pub hotel_id: Id,
}

impl Room {
    pub fn new(room_number: RoomNumber, room_type: RoomType, hotel_id: Id) -> Self {
        Self {
            room_number,
            room_type,
            hotel_id,
        }
    }
}

/// A hotel and its rooms. Room numbers are unique within a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HotelFields")]
pub struct Hotel {
    pub id: Id,
    pub name: String,
    rooms: Vec<Room>,
}

impl Hotel {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rooms: Vec::new(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Inserts the room, dropping any previous room carrying the same number.
    pub fn add_or_update_room(&mut self, room: Room) {
        self.rooms
            .retain(|existing| existing.room_number != room.room_number);
        self.rooms.push(room);
    }

    pub fn has_room_type(&self, room_type: RoomType) -> bool {
        self.rooms.iter().any(|room| room.room_type == room_type)
    }

    pub fn rooms_by_type(&self, room_type: RoomType) -> impl Iterator<Item = &Room> + '_ {
        self.rooms
            .iter()
            .filter(move |room| room.room_type == room_type)
    }

    pub fn room_count(&self, room_type: RoomType) -> usize {
        self.rooms_by_type(room_type).count()
    }
}

/// Wire shape of a hotel, checked before it becomes a [`Hotel`].
#[derive(Deserialize)]
struct HotelFields {
    id: Id,
    name: String,
    #[serde(default)]
    rooms: Vec<Room>,
}

/// Raised when a hotel payload breaks the room inventory rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomListError {
    #[error("room {0} is listed more than once")]
    DuplicateRoomNumber(RoomNumber),
    #[error("room {room_number} belongs to hotel {hotel_id}")]
    ForeignRoom { room_number: RoomNumber, hotel_id: Id },
}

impl TryFrom<HotelFields> for Hotel {
    type Error = RoomListError;

    fn try_from(fields: HotelFields) -> Result<Self, Self::Error> {
        let mut hotel = Hotel::new(fields.id, fields.name);
        for room in fields.rooms {
            if room.hotel_id != hotel.id {
                return Err(RoomListError::ForeignRoom {
                    room_number: room.room_number,
                    hotel_id: room.hotel_id,
                });
            }
            if hotel.rooms.iter().any(|r| r.room_number == room.room_number) {
                return Err(RoomListError::DuplicateRoomNumber(room.room_number));
            }
            hotel.rooms.push(room);
        }
        Ok(hotel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Id,
    pub company_id: Id,
}

impl Employee {
    pub fn new(company_id: Id, id: Id) -> Self {
        Self { id, company_id }
    }
}

/// Set of room types a policy permits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedRoomTypes(BTreeSet<RoomType>);

impl AllowedRoomTypes {
    pub fn allows(&self, room_type: RoomType) -> bool {
        self.0.contains(&room_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = RoomType> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RoomType> for AllowedRoomTypes {
    fn from_iter<I: IntoIterator<Item = RoomType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePolicy {
    pub employee_id: Id,
    pub allowed_room_types: AllowedRoomTypes,
}

impl EmployeePolicy {
    pub fn new(employee_id: Id, room_types: impl IntoIterator<Item = RoomType>) -> Self {
        Self {
            employee_id,
            allowed_room_types: room_types.into_iter().collect(),
        }
    }

    pub fn allows(&self, room_type: RoomType) -> bool {
        self.allowed_room_types.allows(room_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPolicy {
    pub company_id: Id,
    pub allowed_room_types: AllowedRoomTypes,
}

impl CompanyPolicy {
    pub fn new(company_id: Id, room_types: impl IntoIterator<Item = RoomType>) -> Self {
        Self {
            company_id,
            allowed_room_types: room_types.into_iter().collect(),
        }
    }

    pub fn allows(&self, room_type: RoomType) -> bool {
        self.allowed_room_types.allows(room_type)
    }
}

/// Raised when a stay does not span at least one night.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Check-out has to be at least one day after check-in")]
pub struct StayError {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// A confirmed reservation of one room of a given type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookingFields")]
pub struct Booking {
    pub id: Id,
    pub employee_id: Id,
    pub hotel_id: Id,
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Deserialize)]
struct BookingFields {
    id: Id,
    employee_id: Id,
    hotel_id: Id,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<BookingFields> for Booking {
    type Error = StayError;

    fn try_from(fields: BookingFields) -> Result<Self, Self::Error> {
        Booking::create(
            fields.id,
            fields.employee_id,
            fields.hotel_id,
            fields.room_type,
            fields.check_in,
            fields.check_out,
        )
    }
}

impl Booking {
    pub fn create(
        id: Id,
        employee_id: Id,
        hotel_id: Id,
        room_type: RoomType,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self, StayError> {
        if (check_out - check_in).num_days() < 1 {
            return Err(StayError {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            id,
            employee_id,
            hotel_id,
            room_type,
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// True when either end of this stay falls inside the inclusive window.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        let within = |date: NaiveDate| date >= check_in && date <= check_out;
        within(self.check_in) || within(self.check_out)
    }
}
