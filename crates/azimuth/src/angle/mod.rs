//! Angle notation parsing (free-form text to decimal degrees).
//!
//! Purpose
//! - Accept the notations field books and spreadsheet exports actually
//!   contain: symbol-annotated DMS (`26°56'7"`, `26d56m7s`), delimiter
//!   triples (space, dash, colon, underscore), and bare decimals with
//!   either `.` or `,` as the decimal separator.
//!
//! Resolution order
//! - Forms are tried in a fixed priority: symbol DMS (searched anywhere in
//!   the string), then the triples anchored to the whole string, then the
//!   plain-decimal fallback. First match wins, so a given string always
//!   resolves the same way and a bare decimal can never be captured as a
//!   mutilated triple.

mod parse;

pub use parse::{dms_to_degrees, parse_angle};
