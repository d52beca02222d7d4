use crate::infra::load_desk;
use chrono::{Days, Local, NaiveDate};
use clap::Args;
use corporate_booking::booking::{
    Booking, BookingDesk, BookingError, BookingRepository, Catalog, CompanyRepository,
    HotelRepository, Id, InMemoryBookingDesk, PolicyRepository, RoomType,
};
use corporate_booking::error::AppError;
use std::path::PathBuf;

const SAMPLE_CATALOG: &str = r#"{
    "hotels": [
        {
            "id": "hotel-harbour",
            "name": "Harbour View",
            "rooms": [
                { "number": 101, "room_type": "standard" },
                { "number": 102, "room_type": "standard" },
                { "number": 201, "room_type": "juniorSuite" },
                { "number": 301, "room_type": "masterSuite" }
            ]
        },
        {
            "id": "hotel-airport",
            "name": "Airport Inn",
            "rooms": [{ "number": 1, "room_type": "standard" }]
        }
    ],
    "employees": [
        { "company_id": "acme", "employee_id": "alice" },
        { "company_id": "acme", "employee_id": "bob" },
        { "company_id": "globex", "employee_id": "carol" }
    ],
    "company_policies": [
        { "subject_id": "acme", "allowed_room_types": ["standard", "juniorSuite"] }
    ],
    "employee_policies": [
        { "subject_id": "bob", "allowed_room_types": ["standard", "masterSuite"] }
    ]
}"#;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// First check-in date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) check_in: Option<NaiveDate>,
    /// Nights per scripted stay.
    #[arg(long, default_value_t = 2)]
    pub(crate) nights: u32,
    /// Catalog to seed instead of the built-in sample.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

struct ScriptedBooking {
    label: &'static str,
    employee_id: &'static str,
    hotel_id: &'static str,
    room_type: RoomType,
    nights: Option<u32>,
}

const SCRIPT: &[ScriptedBooking] = &[
    ScriptedBooking {
        label: "alice takes a standard room",
        employee_id: "alice",
        hotel_id: "hotel-harbour",
        room_type: RoomType::Standard,
        nights: None,
    },
    ScriptedBooking {
        label: "bob's own policy unlocks the master suite",
        employee_id: "bob",
        hotel_id: "hotel-harbour",
        room_type: RoomType::MasterSuite,
        nights: None,
    },
    ScriptedBooking {
        label: "alice asks for the master suite",
        employee_id: "alice",
        hotel_id: "hotel-harbour",
        room_type: RoomType::MasterSuite,
        nights: None,
    },
    ScriptedBooking {
        label: "carol takes the last standard room",
        employee_id: "carol",
        hotel_id: "hotel-harbour",
        room_type: RoomType::Standard,
        nights: None,
    },
    ScriptedBooking {
        label: "bob wants a standard room too",
        employee_id: "bob",
        hotel_id: "hotel-harbour",
        room_type: RoomType::Standard,
        nights: None,
    },
    ScriptedBooking {
        label: "bob moves to the airport",
        employee_id: "bob",
        hotel_id: "hotel-airport",
        room_type: RoomType::Standard,
        nights: None,
    },
    ScriptedBooking {
        label: "carol tries a same-day stay",
        employee_id: "carol",
        hotel_id: "hotel-harbour",
        room_type: RoomType::JuniorSuite,
        nights: Some(0),
    },
    ScriptedBooking {
        label: "dave books a hotel nobody registered",
        employee_id: "dave",
        hotel_id: "hotel-nowhere",
        room_type: RoomType::Standard,
        nights: None,
    },
];

struct DemoOutcome {
    label: &'static str,
    result: Result<Booking, BookingError>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        check_in,
        nights,
        catalog,
    } = args;

    let check_in = check_in.unwrap_or_else(|| Local::now().date_naive());

    println!("Corporate booking demo");
    let desk = match catalog {
        Some(path) => {
            println!("- catalog: {}", path.display());
            load_desk(Some(path.as_path()))?.0
        }
        None => {
            println!("- catalog: built-in sample");
            sample_desk()?
        }
    };

    println!("\nScripted bookings from {check_in} ({nights} nights each)");
    let outcomes = run_script(&desk, check_in, nights);
    for outcome in &outcomes {
        match &outcome.result {
            Ok(booking) => println!(
                "  booked   {}: {} {} -> {} ({} nights, booking {})",
                outcome.label,
                booking.room_type,
                booking.check_in,
                booking.check_out,
                booking.nights(),
                booking.id
            ),
            Err(err) => println!("  rejected {}: {}", outcome.label, err),
        }
    }

    let confirmed = outcomes.iter().filter(|o| o.result.is_ok()).count();
    println!(
        "\n{} of {} scripted bookings confirmed",
        confirmed,
        outcomes.len()
    );

    println!("Bookings per employee:");
    for employee in ["alice", "bob", "carol", "dave"] {
        match desk.bookings().bookings_for(&Id::new(employee)) {
            Ok(bookings) => println!("  - {employee}: {}", bookings.len()),
            Err(err) => println!("  - {employee}: unavailable ({err})"),
        }
    }

    Ok(())
}

fn sample_desk() -> Result<InMemoryBookingDesk, AppError> {
    let desk = InMemoryBookingDesk::in_memory();
    let summary = Catalog::from_reader(SAMPLE_CATALOG.as_bytes())?.apply(&desk)?;
    println!(
        "- seeded {} hotels, {} rooms, {} employees, {} policies",
        summary.hotels, summary.rooms, summary.employees, summary.policies
    );
    Ok(desk)
}

fn run_script<H, C, P, B>(
    desk: &BookingDesk<H, C, P, B>,
    check_in: NaiveDate,
    nights: u32,
) -> Vec<DemoOutcome>
where
    H: HotelRepository,
    C: CompanyRepository,
    P: PolicyRepository,
    B: BookingRepository,
{
    SCRIPT
        .iter()
        .map(|step| {
            let check_out = stay_end(check_in, step.nights.unwrap_or(nights));
            DemoOutcome {
                label: step.label,
                result: desk.bookings().book(
                    Id::new(step.employee_id),
                    Id::new(step.hotel_id),
                    step.room_type,
                    check_in,
                    check_out,
                ),
            }
        })
        .collect()
}

fn stay_end(check_in: NaiveDate, nights: u32) -> NaiveDate {
    check_in
        .checked_add_days(Days::new(u64::from(nights)))
        .unwrap_or(NaiveDate::MAX)
}
