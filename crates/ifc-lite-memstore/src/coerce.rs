// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Conversions applied when a value is read as a different kind

use ifc_lite_sdai::{StoreKind, StoreValue};

/// Convert a stored value to the requested kind
///
/// `kind` must not be [`StoreKind::Adb`]; boxing is the store's job.
pub(crate) fn coerce(value: &StoreValue, kind: StoreKind) -> Option<StoreValue> {
    if value.kind() == kind {
        return Some(value.clone());
    }

    match (value, kind) {
        (StoreValue::Integer(i), StoreKind::Real) => Some(StoreValue::Real(*i as f64)),
        (StoreValue::Integer(i), StoreKind::String) => Some(StoreValue::String(i.to_string())),
        (StoreValue::Real(r), StoreKind::String) => Some(StoreValue::String(r.to_string())),

        (StoreValue::Boolean(b), StoreKind::Logical) => Some(StoreValue::Logical(letter(*b))),
        (StoreValue::Boolean(b), StoreKind::Enumeration) => {
            Some(StoreValue::Enumeration(letter(*b)))
        }
        (StoreValue::Boolean(b), StoreKind::String) => Some(StoreValue::String(letter(*b))),

        (StoreValue::Logical(s), StoreKind::Boolean)
        | (StoreValue::Enumeration(s), StoreKind::Boolean) => boolean(s).map(StoreValue::Boolean),
        (StoreValue::Logical(s), StoreKind::Enumeration) => {
            Some(StoreValue::Enumeration(s.clone()))
        }
        (StoreValue::Enumeration(s), StoreKind::Logical) if is_logical(s) => {
            Some(StoreValue::Logical(s.clone()))
        }
        (StoreValue::Logical(s), StoreKind::String)
        | (StoreValue::Enumeration(s), StoreKind::String)
        | (StoreValue::Binary(s), StoreKind::String) => Some(StoreValue::String(s.clone())),

        (StoreValue::String(s), StoreKind::Binary) => Some(StoreValue::Binary(s.clone())),

        _ => None,
    }
}

fn letter(b: bool) -> String {
    if b { "T" } else { "F" }.to_string()
}

fn boolean(s: &str) -> Option<bool> {
    match s {
        "T" | "TRUE" => Some(true),
        "F" | "FALSE" => Some(false),
        _ => None,
    }
}

fn is_logical(s: &str) -> bool {
    matches!(s, "T" | "F" | "U")
}
