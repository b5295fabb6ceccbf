//! Player stat records and their validation
//!
//! Raw input arrives as JSON from the calling agent. [`validate_pair`] turns
//! two raw values into typed [`StatRecord`]s, or reports every problem it
//! found in both of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One player's per-game line for a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    pub spg: f64,
    pub bpg: f64,
    pub fg_pct: f64,
    pub ft_pct: f64,
    pub three_pm: f64,
    pub tov: f64,
    pub gp: u32,
}

/// Which side of the comparison a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSlot {
    Player1,
    Player2,
}

impl RecordSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordSlot::Player1 => "player1",
            RecordSlot::Player2 => "player2",
        }
    }
}

impl fmt::Display for RecordSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Problem {
    Missing,
    NotAnObject,
    NotAString,
    EmptyName,
    NotANumber,
    NotFinite,
    Negative,
    OutOfRange,
    NotAnInteger,
    TooLarge,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Problem::Missing => "is missing",
            Problem::NotAnObject => "must be a JSON object",
            Problem::NotAString => "must be a string",
            Problem::EmptyName => "must not be empty",
            Problem::NotANumber => "must be a number",
            Problem::NotFinite => "must be finite",
            Problem::Negative => "must not be negative",
            Problem::OutOfRange => "must be between 0 and 100",
            Problem::NotAnInteger => "must be a whole number",
            Problem::TooLarge => "is too large",
        };
        f.write_str(msg)
    }
}

/// A single field of a single record that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{record}.{field} {problem}")]
pub struct ValidationError {
    pub record: RecordSlot,
    /// Field name, or `"record"` when the record itself is malformed
    pub field: &'static str,
    pub problem: Problem,
}

/// Every [`ValidationError`] found across a request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first error reported for `record.field`, if any.
    pub fn find(&self, record: RecordSlot, field: &str) -> Option<&ValidationError> {
        self.0
            .iter()
            .find(|e| e.record == record && e.field == field)
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    /// `Ok` when `errors` is empty, otherwise the collected errors.
    pub(crate) fn from_vec(errors: Vec<ValidationError>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Required fields, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "name", "ppg", "rpg", "apg", "spg", "bpg", "fg_pct", "ft_pct", "three_pm", "tov", "gp",
];

#[derive(Clone, Copy)]
enum Bound {
    NonNegative,
    Percentage,
}

fn check_number(value: f64, bound: Bound) -> Option<Problem> {
    if !value.is_finite() {
        return Some(Problem::NotFinite);
    }
    match bound {
        Bound::NonNegative if value < 0.0 => Some(Problem::Negative),
        Bound::Percentage if !(0.0..=100.0).contains(&value) => Some(Problem::OutOfRange),
        _ => None,
    }
}

impl StatRecord {
    fn numeric_fields(&self) -> [(&'static str, f64, Bound); 9] {
        [
            ("ppg", self.ppg, Bound::NonNegative),
            ("rpg", self.rpg, Bound::NonNegative),
            ("apg", self.apg, Bound::NonNegative),
            ("spg", self.spg, Bound::NonNegative),
            ("bpg", self.bpg, Bound::NonNegative),
            ("fg_pct", self.fg_pct, Bound::Percentage),
            ("ft_pct", self.ft_pct, Bound::Percentage),
            ("three_pm", self.three_pm, Bound::NonNegative),
            ("tov", self.tov, Bound::NonNegative),
        ]
    }

    /// Check a record that was built in Rust rather than parsed from JSON.
    /// [`crate::fantasy::compare_records`] runs this on both sides.
    pub fn check(&self, slot: RecordSlot) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError {
                record: slot,
                field: "name",
                problem: Problem::EmptyName,
            });
        }
        for (field, value, bound) in self.numeric_fields() {
            if let Some(problem) = check_number(value, bound) {
                errors.push(ValidationError {
                    record: slot,
                    field,
                    problem,
                });
            }
        }
        ValidationErrors::from_vec(errors)
    }
}

/// Collects problems for one record while its fields are read.
struct FieldReader<'a> {
    slot: RecordSlot,
    map: &'a Map<String, Value>,
    errors: Vec<ValidationError>,
}

impl<'a> FieldReader<'a> {
    fn fail(&mut self, field: &'static str, problem: Problem) {
        self.errors.push(ValidationError {
            record: self.slot,
            field,
            problem,
        });
    }

    fn present(&mut self, field: &'static str) -> Option<&'a Value> {
        let map = self.map;
        match map.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, Problem::Missing);
                None
            }
            Some(v) => Some(v),
        }
    }

    fn name(&mut self) -> Option<String> {
        match self.present("name")? {
            Value::String(s) if s.trim().is_empty() => {
                self.fail("name", Problem::EmptyName);
                None
            }
            Value::String(s) => Some(s.trim().to_string()),
            _ => {
                self.fail("name", Problem::NotAString);
                None
            }
        }
    }

    fn optional_text(&mut self, field: &'static str) -> Option<String> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.fail(field, Problem::NotAString);
                None
            }
        }
    }

    fn number(&mut self, field: &'static str, bound: Bound) -> Option<f64> {
        let Some(value) = self.present(field)?.as_f64() else {
            self.fail(field, Problem::NotANumber);
            return None;
        };
        match check_number(value, bound) {
            Some(problem) => {
                self.fail(field, problem);
                None
            }
            None => Some(value),
        }
    }

    fn games(&mut self) -> Option<u32> {
        let value = self.present("gp")?;
        if let Some(gp) = value.as_u64() {
            return match u32::try_from(gp) {
                Ok(gp) => Some(gp),
                Err(_) => {
                    self.fail("gp", Problem::TooLarge);
                    None
                }
            };
        }
        let Some(gp) = value.as_f64() else {
            self.fail("gp", Problem::NotANumber);
            return None;
        };
        let problem = if gp < 0.0 {
            Problem::Negative
        } else if gp.fract() != 0.0 {
            Problem::NotAnInteger
        } else if gp > f64::from(u32::MAX) {
            Problem::TooLarge
        } else {
            return Some(gp as u32);
        };
        self.fail("gp", problem);
        None
    }
}

/// Validate one raw record. All of its problems are reported together.
pub fn validate_record(slot: RecordSlot, raw: &Value) -> Result<StatRecord, ValidationErrors> {
    let Some(map) = raw.as_object() else {
        let problem = if raw.is_null() {
            Problem::Missing
        } else {
            Problem::NotAnObject
        };
        return Err(ValidationErrors(vec![ValidationError {
            record: slot,
            field: "record",
            problem,
        }]));
    };

    let mut r = FieldReader {
        slot,
        map,
        errors: Vec::new(),
    };

    let name = r.name();
    let team = r.optional_text("team");
    let position = r.optional_text("position");
    let ppg = r.number("ppg", Bound::NonNegative);
    let rpg = r.number("rpg", Bound::NonNegative);
    let apg = r.number("apg", Bound::NonNegative);
    let spg = r.number("spg", Bound::NonNegative);
    let bpg = r.number("bpg", Bound::NonNegative);
    let fg_pct = r.number("fg_pct", Bound::Percentage);
    let ft_pct = r.number("ft_pct", Bound::Percentage);
    let three_pm = r.number("three_pm", Bound::NonNegative);
    let tov = r.number("tov", Bound::NonNegative);
    let gp = r.games();

    match (
        name, ppg, rpg, apg, spg, bpg, fg_pct, ft_pct, three_pm, tov, gp,
    ) {
        (
            Some(name),
            Some(ppg),
            Some(rpg),
            Some(apg),
            Some(spg),
            Some(bpg),
            Some(fg_pct),
            Some(ft_pct),
            Some(three_pm),
            Some(tov),
            Some(gp),
        ) if r.errors.is_empty() => Ok(StatRecord {
            name,
            team,
            position,
            ppg,
            rpg,
            apg,
            spg,
            bpg,
            fg_pct,
            ft_pct,
            three_pm,
            tov,
            gp,
        }),
        _ => Err(ValidationErrors(r.errors)),
    }
}

/// Validate both records. Both are always checked, so a request with
/// problems on each side reports all of them at once.
pub fn validate_pair(
    player1: &Value,
    player2: &Value,
) -> Result<(StatRecord, StatRecord), ValidationErrors> {
    match (
        validate_record(RecordSlot::Player1, player1),
        validate_record(RecordSlot::Player2, player2),
    ) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (first, second) => {
            let mut errors = Vec::new();
            if let Err(e) = first {
                errors.extend(e.0);
            }
            if let Err(e) = second {
                errors.extend(e.0);
            }
            Err(ValidationErrors(errors))
        }
    }
}
