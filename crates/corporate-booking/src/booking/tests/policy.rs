use super::common::*;
use crate::booking::domain::{CompanyPolicy, EmployeePolicy, Id, RoomType};
use crate::booking::{ApplicablePolicy, BookingError, BookingPolicyService};
use std::sync::Arc;

#[test]
fn allows_booking_when_there_are_no_policies() {
    let fixture = fixture();

    for room_type in RoomType::ALL {
        assert!(fixture
            .desk
            .policies()
            .is_booking_allowed(&Id::generate(), room_type)
            .expect("policy resolves"));
    }
}

#[test]
fn employee_policy_decides_when_present() {
    let fixture = fixture();
    let policies = fixture.desk.policies();
    policies
        .set_employee_policy(employee_id(), [RoomType::Standard, RoomType::JuniorSuite])
        .expect("policy set");

    assert!(policies
        .is_booking_allowed(&employee_id(), RoomType::Standard)
        .expect("policy resolves"));
    assert!(!policies
        .is_booking_allowed(&employee_id(), RoomType::MasterSuite)
        .expect("policy resolves"));
}

#[test]
fn company_policy_applies_to_registered_employees() {
    let fixture = seeded_fixture(&[]);
    let policies = fixture.desk.policies();
    policies
        .set_company_policy(company_id(), [RoomType::Standard, RoomType::JuniorSuite])
        .expect("policy set");

    assert!(policies
        .is_booking_allowed(&employee_id(), RoomType::JuniorSuite)
        .expect("policy resolves"));
    assert!(!policies
        .is_booking_allowed(&employee_id(), RoomType::MasterSuite)
        .expect("policy resolves"));
}

#[test]
fn company_policy_is_ignored_for_unregistered_employees() {
    let fixture = fixture();
    let policies = fixture.desk.policies();
    policies
        .set_company_policy(company_id(), [RoomType::Standard])
        .expect("policy set");

    assert!(policies
        .is_booking_allowed(&employee_id(), RoomType::MasterSuite)
        .expect("policy resolves"));
}

#[test]
fn employee_policy_takes_precedence_over_company_policy() {
    let fixture = seeded_fixture(&[]);
    let policies = fixture.desk.policies();
    policies
        .set_company_policy(company_id(), [RoomType::Standard])
        .expect("policy set");
    policies
        .set_employee_policy(employee_id(), [RoomType::JuniorSuite])
        .expect("policy set");

    assert!(policies
        .is_booking_allowed(&employee_id(), RoomType::JuniorSuite)
        .expect("policy resolves"));
    assert!(
        !policies
            .is_booking_allowed(&employee_id(), RoomType::Standard)
            .expect("policy resolves"),
        "a stricter employee policy still wins"
    );
    assert_eq!(
        policies
            .applicable_policy(&employee_id())
            .expect("policy resolves"),
        ApplicablePolicy::Employee(EmployeePolicy::new(employee_id(), [RoomType::JuniorSuite]))
    );
}

#[test]
fn empty_employee_policy_blocks_everything() {
    let fixture = seeded_fixture(&[]);
    let policies = fixture.desk.policies();
    policies
        .set_employee_policy(employee_id(), Vec::<RoomType>::new())
        .expect("policy set");

    let stored = policies
        .employee_policy(&employee_id())
        .expect("lookup")
        .expect("policy stored");
    assert!(stored.allowed_room_types.is_empty());
    for room_type in RoomType::ALL {
        assert!(!policies
            .is_booking_allowed(&employee_id(), room_type)
            .expect("policy resolves"));
    }
}

#[test]
fn setting_a_policy_replaces_the_previous_one() {
    let fixture = fixture();
    let policies = fixture.desk.policies();
    policies
        .set_company_policy(company_id(), [RoomType::Standard])
        .expect("policy set");
    policies
        .set_company_policy(company_id(), [RoomType::MasterSuite])
        .expect("policy replaced");

    assert_eq!(
        policies.company_policy(&company_id()).expect("lookup"),
        Some(CompanyPolicy::new(company_id(), [RoomType::MasterSuite]))
    );
}

#[test]
fn removing_the_company_policy_restores_the_default() {
    let fixture = seeded_fixture(&[]);
    let policies = fixture.desk.policies();
    policies
        .set_company_policy(company_id(), [RoomType::Standard])
        .expect("policy set");

    policies
        .remove_company_policy(&company_id())
        .expect("policy removed");

    assert_eq!(
        policies
            .applicable_policy(&employee_id())
            .expect("policy resolves"),
        ApplicablePolicy::Unrestricted
    );
}

#[test]
fn repository_failures_are_not_treated_as_allowed() {
    let service = BookingPolicyService::new(
        Arc::new(UnavailableRepository),
        Arc::new(UnavailableRepository),
    );

    let result = service.is_booking_allowed(&employee_id(), RoomType::Standard);

    assert!(matches!(result, Err(BookingError::Repository(_))));
}
