//! Recovery points outside the checks: catch, thread joins, the panic hook.

use super::common::{PROVIDED, REQUIRES_PROVIDED, UNREACHABLE};
use contract::{catch, fail, install_panic_hook, requires, violation_from_payload, Category};
use std::panic;
use std::thread;

fn handler(input: Option<&str>) -> usize {
    requires(input.is_some(), PROVIDED);
    match input {
        Some(s) => s.len(),
        None => fail(UNREACHABLE),
    }
}

#[test]
fn test_request_boundary_degrades_gracefully() {
    let responses: Vec<Result<usize, Category>> = [Some("abc"), None, Some("")]
        .into_iter()
        .map(|input| catch(|| handler(input)).map_err(|v| v.category()))
        .collect();

    assert_eq!(
        responses,
        vec![Ok(3), Err(Category::Requires), Ok(0)]
    );
}

#[test]
fn test_violation_crosses_thread_join() {
    let payload = thread::spawn(|| requires(false, PROVIDED))
        .join()
        .expect_err("the thread should have died");

    let violation = violation_from_payload(payload.as_ref()).expect("payload is a violation");
    assert!(violation.is_requires());
    assert_eq!(violation.message(), REQUIRES_PROVIDED);
}

#[test]
fn test_plain_panic_is_not_a_violation() {
    let payload = thread::spawn(|| panic!("boom")).join().unwrap_err();
    assert!(violation_from_payload(payload.as_ref()).is_none());
}

#[test]
fn test_catch_is_transparent_to_other_panics() {
    let outer = panic::catch_unwind(|| catch(|| panic!("index out of range")));
    let payload = outer.expect_err("non-contract panic should keep unwinding");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"index out of range"));
}

#[test]
fn test_nested_catch_stops_at_innermost() {
    let outer = catch(|| {
        let inner = catch(|| fail(UNREACHABLE));
        assert!(inner.unwrap_err().is_fail());
        "recovered"
    });
    assert_eq!(outer, Ok("recovered"));
}

#[test]
fn test_panic_hook_install_is_idempotent() {
    install_panic_hook();
    install_panic_hook();

    let violation = catch(|| requires(false, PROVIDED)).unwrap_err();
    assert!(violation.is_requires());

    // Non-violation panics still unwind as usual. The printed output is checked in hook_output.rs.
    let payload = panic::catch_unwind(|| panic!("still a panic")).unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"still a panic"));
}
