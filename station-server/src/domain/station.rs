//! Station identifier and record types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{RequiredField, ValidationError};

/// Error returned when a raw identifier cannot name a station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id {value}: {reason}")]
pub struct InvalidStationId {
    value: i64,
    reason: &'static str,
}

/// A station identifier.
///
/// Identifiers are positive and assigned by the repository. This type
/// guarantees that any `StationId` value is at least 1.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationId;
///
/// let id = StationId::parse(16).unwrap();
/// assert_eq!(id.get(), 16);
///
/// // Zero and negative ids never name a station
/// assert!(StationId::parse(0).is_err());
/// assert!(StationId::parse(-3).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// The first identifier handed out by an empty repository.
    pub const FIRST: StationId = StationId(1);

    /// Parse a station id from a signed integer (as found in a URL path).
    pub fn parse(value: i64) -> Result<Self, InvalidStationId> {
        if value < 1 {
            return Err(InvalidStationId {
                value,
                reason: "must be at least 1",
            });
        }

        u32::try_from(value)
            .map(StationId)
            .map_err(|_| InvalidStationId {
                value,
                reason: "out of range",
            })
    }

    /// Returns the raw identifier.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The identifier after this one, or `None` if the id space is used up.
    pub fn next(self) -> Option<StationId> {
        self.0.checked_add(1).map(StationId)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored radio station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub call_sign: String,
    pub code: String,
    pub state: String,
    /// May be empty.
    #[serde(default)]
    pub city: String,
}

impl Station {
    /// Build a stored station from an assigned id and a validated draft.
    pub fn from_draft(id: StationId, draft: StationDraft) -> Self {
        Self {
            id,
            call_sign: draft.call_sign,
            code: draft.code,
            state: draft.state,
            city: draft.city,
        }
    }

    /// Overwrite every non-id field with the draft's values.
    pub fn apply(&mut self, draft: StationDraft) {
        self.call_sign = draft.call_sign;
        self.code = draft.code;
        self.state = draft.state;
        self.city = draft.city;
    }
}

/// The validated, id-less contents of a station write.
///
/// A draft can only be obtained through [`StationDraft::validate`], so code
/// holding one can trust that the required fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDraft {
    call_sign: String,
    code: String,
    state: String,
    city: String,
}

impl StationDraft {
    /// Validate raw field values.
    ///
    /// Every missing required field is reported, not just the first. A value
    /// made only of whitespace counts as missing. A missing city becomes the
    /// empty string.
    pub fn validate(
        call_sign: Option<String>,
        code: Option<String>,
        state: Option<String>,
        city: Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();

        let call_sign = require(call_sign, RequiredField::CallSign, &mut missing);
        let code = require(code, RequiredField::Code, &mut missing);
        let state = require(state, RequiredField::State, &mut missing);

        match (call_sign, code, state) {
            (Some(call_sign), Some(code), Some(state)) => Ok(Self {
                call_sign,
                code,
                state,
                city: city.unwrap_or_default(),
            }),
            _ => Err(ValidationError::new(missing)),
        }
    }

    pub fn call_sign(&self) -> &str {
        &self.call_sign
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

fn require(
    value: Option<String>,
    field: RequiredField,
    missing: &mut Vec<RequiredField>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn parse_valid_ids() {
        assert_eq!(StationId::parse(1).unwrap().get(), 1);
        assert_eq!(StationId::parse(50).unwrap().get(), 50);
        assert_eq!(
            StationId::parse(i64::from(u32::MAX)).unwrap().get(),
            u32::MAX
        );
    }

    #[test]
    fn reject_non_positive_ids() {
        assert!(StationId::parse(0).is_err());
        assert!(StationId::parse(-1).is_err());
        assert!(StationId::parse(i64::MIN).is_err());
    }

    #[test]
    fn reject_out_of_range_ids() {
        let err = StationId::parse(i64::from(u32::MAX) + 1).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn next_id_stops_at_the_end_of_the_space() {
        assert_eq!(StationId::FIRST.next(), Some(StationId(2)));
        assert_eq!(StationId(u32::MAX).next(), None);
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse(16).unwrap();
        assert_eq!(id.to_string(), "16");
        assert_eq!(format!("{id:?}"), "StationId(16)");
    }

    #[test]
    fn validate_full_draft() {
        let draft =
            StationDraft::validate(some("2DayFM"), some("2DAY"), some("NSW"), some("Sydney"))
                .unwrap();

        assert_eq!(draft.call_sign(), "2DayFM");
        assert_eq!(draft.code(), "2DAY");
        assert_eq!(draft.state(), "NSW");
        assert_eq!(draft.city(), "Sydney");
    }

    #[test]
    fn city_is_optional() {
        let draft = StationDraft::validate(some("3AW"), some("3AW"), some("VIC"), None).unwrap();
        assert_eq!(draft.city(), "");
    }

    #[test]
    fn reports_every_missing_field() {
        let err = StationDraft::validate(some("Bla"), None, None, None).unwrap_err();

        assert_eq!(err.fields(), &[RequiredField::Code, RequiredField::State]);
        let message = err.to_string();
        assert!(message.contains("The Code field is required"));
        assert!(message.contains("The State field is required"));
        assert!(!message.contains("CallSign"));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let err = StationDraft::validate(some(""), some("   "), some("\t"), some("Perth"))
            .unwrap_err();

        assert_eq!(
            err.fields(),
            &[RequiredField::CallSign, RequiredField::Code, RequiredField::State]
        );
    }

    #[test]
    fn station_json_uses_camel_case() {
        let draft =
            StationDraft::validate(some("2GB"), some("2GB"), some("NSW"), some("Sydney")).unwrap();
        let station = Station::from_draft(StationId::parse(7).unwrap(), draft);

        let json = serde_json::to_value(&station).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "callSign": "2GB",
                "code": "2GB",
                "state": "NSW",
                "city": "Sydney",
            })
        );
    }

    #[test]
    fn apply_keeps_id() {
        let first =
            StationDraft::validate(some("4BC"), some("4BC"), some("QLD"), some("Brisbane"))
                .unwrap();
        let second = StationDraft::validate(some("4KQ"), some("4KQ"), some("QLD"), None).unwrap();

        let mut station = Station::from_draft(StationId::parse(3).unwrap(), first);
        station.apply(second);

        assert_eq!(station.id.get(), 3);
        assert_eq!(station.call_sign, "4KQ");
        assert_eq!(station.city, "");
    }

    proptest! {
        #[test]
        fn whitespace_only_fields_are_rejected(blank in "[ \t\r\n]{0,8}") {
            let result = StationDraft::validate(
                Some(blank.clone()),
                Some("code".into()),
                Some("NSW".into()),
                None,
            );
            prop_assert!(result.is_err());
        }

        #[test]
        fn non_blank_fields_are_accepted(
            call_sign in "[A-Za-z0-9]{1,12}",
            code in "[A-Za-z0-9]{1,12}",
            state in "[A-Z]{2,3}",
        ) {
            let draft = StationDraft::validate(
                Some(call_sign.clone()),
                Some(code.clone()),
                Some(state.clone()),
                None,
            ).unwrap();
            prop_assert_eq!(draft.call_sign(), call_sign.as_str());
            prop_assert_eq!(draft.code(), code.as_str());
            prop_assert_eq!(draft.state(), state.as_str());
        }
    }
}
