use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub type UserId = u32;

/// Accepts any JSON number with an integral value in `u32` range, so `12.0`
/// reads the same as `12`. Strings and fractional numbers are rejected.
pub fn deserialize_user_id<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() == 0.0 && (0.0..=f64::from(UserId::MAX)).contains(&value) {
        Ok(value as UserId)
    } else {
        Err(de::Error::custom(format!("invalid user id {value}, expected a whole number")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfos {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    pub calorie_count: u32,
    pub protein_count: u32,
    pub carbohydrate_count: u32,
    pub lipid_count: u32,
}

/// Profile record from `userMainData`, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMainData {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub id: UserId,
    pub user_infos: UserInfos,
    /// Share of the daily goal reached, in `0.0..=1.0`. Some records call it `score`.
    #[serde(alias = "score")]
    pub today_score: f64,
    pub key_data: KeyData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySession {
    pub day: String,
    pub kilogram: f64,
    pub calories: f64,
}

impl ActivitySession {
    /// Calendar date of the session when the label is an ISO date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.day, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivity {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub user_id: UserId,
    pub sessions: Vec<ActivitySession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageSession {
    /// 1 is Monday, 7 is Sunday.
    pub day: u8,
    pub session_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAverageSessions {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub user_id: UserId,
    pub sessions: Vec<AverageSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub value: f64,
    pub kind: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPerformance {
    #[serde(deserialize_with = "deserialize_user_id")]
    pub user_id: UserId,
    pub kind: BTreeMap<u32, String>,
    pub data: Vec<PerformancePoint>,
}

impl UserPerformance {
    pub fn kind_name(&self, kind: u32) -> Option<&str> {
        self.kind.get(&kind).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn main_data_accepts_score_alias() {
        let record: UserMainData = serde_json::from_value(json!({
            "id": 18,
            "userInfos": { "firstName": "Cecilia", "lastName": "Ratorez", "age": 34 },
            "score": 0.3,
            "keyData": { "calorieCount": 2500, "proteinCount": 90, "carbohydrateCount": 150, "lipidCount": 120 }
        }))
        .unwrap();

        assert_eq!(record.id, 18);
        assert_eq!(record.today_score, 0.3);
        assert_eq!(record.key_data.lipid_count, 120);
    }

    #[test]
    fn user_ids_accept_integral_floats_only() {
        let record: UserActivity =
            serde_json::from_value(json!({ "userId": 12.0, "sessions": [] })).unwrap();
        assert_eq!(record.user_id, 12);

        for bad in [json!(12.5), json!("12"), json!(-1), json!(5e9)] {
            let parsed: Result<UserActivity, _> =
                serde_json::from_value(json!({ "userId": bad, "sessions": [] }));
            assert!(parsed.is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn activity_session_parses_iso_day() {
        let session = ActivitySession {
            day: "2020-07-01".to_string(),
            kilogram: 80.0,
            calories: 240.0,
        };
        assert_eq!(session.date(), NaiveDate::from_ymd_opt(2020, 7, 1));

        let session = ActivitySession {
            day: "mardi".to_string(),
            ..session
        };
        assert_eq!(session.date(), None);
    }

    #[test]
    fn performance_kind_keys_are_numeric() {
        let record: UserPerformance = serde_json::from_value(json!({
            "userId": 12,
            "kind": { "1": "cardio", "2": "energy" },
            "data": [{ "value": 80, "kind": 1 }, { "value": 120, "kind": 2 }]
        }))
        .unwrap();

        assert_eq!(record.kind_name(2), Some("energy"));
        assert_eq!(record.kind_name(7), None);
        assert_eq!(record.data[0].value, 80.0);
    }
}
