//! Gradient color stops.
//!
//! `from-*`, `via-*` and `to-*` utilities compose a gradient through custom
//! properties. `from` and `to` always reset both stop chains to the two-stop
//! form so a gradient without a `via` renders. `via` only rewrites
//! `--tw-gradient-via-stops` with the three-stop chain and leaves
//! `--tw-gradient-stops` as `from`/`to` last set it.

use crate::Declarations;
use crate::utility::UtilityFamily;

pub const GRADIENT_FROM: &str = "--tw-gradient-from";
pub const GRADIENT_VIA: &str = "--tw-gradient-via";
pub const GRADIENT_TO: &str = "--tw-gradient-to";
pub const GRADIENT_VIA_STOPS: &str = "--tw-gradient-via-stops";
pub const GRADIENT_STOPS: &str = "--tw-gradient-stops";

/// Stop chain used when no `via` color is set, falling back to an inherited
/// via chain when one exists.
pub const TWO_STOP_CHAIN: &str = concat!(
    "var(--tw-gradient-via-stops, var(--tw-gradient-position), ",
    "var(--tw-gradient-from) var(--tw-gradient-from-position), ",
    "var(--tw-gradient-to) var(--tw-gradient-to-position))",
);

/// Stop chain with a middle color.
pub const THREE_STOP_CHAIN: &str = concat!(
    "var(--tw-gradient-position), ",
    "var(--tw-gradient-from) var(--tw-gradient-from-position), ",
    "var(--tw-gradient-via) var(--tw-gradient-via-position), ",
    "var(--tw-gradient-to) var(--tw-gradient-to-position)",
);

fn endpoint(property: &str, value: &str) -> Declarations {
    Declarations::from([
        (property.to_string(), value.to_string()),
        (GRADIENT_VIA_STOPS.to_string(), TWO_STOP_CHAIN.to_string()),
        (GRADIENT_STOPS.to_string(), TWO_STOP_CHAIN.to_string()),
    ])
}

/// Declarations of a `from-*` utility.
pub fn from(value: &str) -> Declarations {
    endpoint(GRADIENT_FROM, value)
}

/// Declarations of a `to-*` utility.
pub fn to(value: &str) -> Declarations {
    endpoint(GRADIENT_TO, value)
}

/// Declarations of a `via-*` utility. Never touches `--tw-gradient-stops`.
pub fn via(value: &str) -> Declarations {
    Declarations::from([
        (GRADIENT_VIA.to_string(), value.to_string()),
        (GRADIENT_VIA_STOPS.to_string(), THREE_STOP_CHAIN.to_string()),
    ])
}

/// The `from`, `via` and `to` families, in registration order.
pub fn gradient_families() -> Vec<UtilityFamily> {
    vec![
        UtilityFamily::new("from", from),
        UtilityFamily::new("to", to),
        UtilityFamily::new("via", via),
    ]
}
