#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn alert_is_noop_but_callable() {
    alert("Could not update feature settings. Reverting change.");
}
