//! Entities that enforce an invariant around their public operations.

use super::common::{expect_violation, record_violation, Record};
use contract::{preserving, Invariant};
use std::panic::AssertUnwindSafe;

#[test]
fn test_valid_record_passes_invariant() {
    assert!(record_violation(&Record::valid()).is_none());
}

#[test]
fn test_negative_value_violates_invariant() {
    let record = Record {
        value: -1,
        ..Record::valid()
    };

    let violation = record_violation(&record).expect("value = -1 must violate the invariant");
    assert!(violation.is_invariant());
    assert!(violation.message().contains("value must be positive"));
}

#[test]
fn test_blank_name_violates_invariant() {
    let record = Record {
        name: " \t ".to_string(),
        ..Record::valid()
    };

    let violation = record_violation(&record).unwrap();
    assert!(violation.message().contains("name must not be blank"));
}

#[test]
fn test_missing_obj_violates_invariant() {
    let record = Record {
        obj: None,
        ..Record::valid()
    };

    let violation = record_violation(&record).unwrap();
    assert!(violation.message().contains("obj must be present"));
}

#[test]
fn test_constraints_checked_in_order() {
    // Both name and value are broken; the first constraint reports.
    let record = Record {
        name: String::new(),
        value: -5,
        ..Record::valid()
    };

    let violation = record_violation(&record).unwrap();
    assert!(violation.message().contains("name must not be blank"));
}

#[test]
fn test_operation_that_breaks_invariant_is_caught_on_exit() {
    let mut record = Record::valid();
    assert_eq!(record.adjust(3), 3);

    let violation = expect_violation(AssertUnwindSafe(|| record.adjust(-10)));
    assert!(violation.is_invariant());
    assert!(violation.message().contains("value must be positive"));
    // The mutation happened; the violation reports it rather than rolling back.
    assert_eq!(record.value, -7);
}

#[test]
fn test_operation_on_corrupt_entity_is_refused_on_entry() {
    let mut record = Record::valid();
    record.rename_unchecked("");

    let mut ran = false;
    let violation = expect_violation(AssertUnwindSafe(|| {
        preserving(&mut record, |_| ran = true);
    }));
    assert!(violation.is_invariant());
    assert!(!ran);
}

#[test]
fn test_invariant_through_trait_object() {
    let record = Record {
        obj: None,
        ..Record::valid()
    };
    let entity: &dyn Invariant = &record;

    let violation = expect_violation(AssertUnwindSafe(|| entity.invariant()));
    assert!(violation.is_invariant());
}
