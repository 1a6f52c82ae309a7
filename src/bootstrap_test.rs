use std::cell::Cell;

use super::*;

#[test]
fn claim_mount_succeeds_once() {
    let flag = AtomicBool::new(false);
    assert_eq!(claim_mount(&flag, || {}), Ok(()));
    assert_eq!(claim_mount(&flag, || {}), Err(ClientError::AlreadyMounted));
    assert_eq!(claim_mount(&flag, || {}), Err(ClientError::AlreadyMounted));
}

#[test]
fn first_mount_setup_runs_only_for_the_winning_claim() {
    let flag = AtomicBool::new(false);
    let installs = Cell::new(0);

    assert_eq!(claim_mount(&flag, || installs.set(installs.get() + 1)), Ok(()));
    assert_eq!(claim_mount(&flag, || installs.set(installs.get() + 1)), Err(ClientError::AlreadyMounted));

    assert_eq!(installs.get(), 1);
}

#[cfg(not(feature = "csr"))]
#[test]
fn mount_is_unavailable_outside_browser() {
    assert_eq!(mount(&ClientConfig::default()), Err(ClientError::Unavailable));
}
