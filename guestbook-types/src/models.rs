use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Custom serde module so DateTime fields serialize as RFC 3339 strings,
// matching the representation stored in the database.
mod datetime_format {
    use chrono::{DateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DateTime<Utc>>().map_err(serde::de::Error::custom)
    }
}

/// A stored user row. Names are unique; ids are assigned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// A stored comment row. `user_id` is null when the author name given at
/// insert time matched no user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub user_id: Option<i64>,
    #[serde(with = "datetime_format")]
    pub date: DateTime<Utc>,
    pub comment: String,
}

/// A comment joined to its author, as returned by the report query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i64,
    pub username: String,
    #[serde(with = "datetime_format")]
    pub date: DateTime<Utc>,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_comment_dates_serialize_as_rfc3339() {
        let comment = Comment {
            id: 1,
            user_id: Some(2),
            date: Utc.with_ymd_and_hms(2024, 1, 10, 8, 30, 0).unwrap(),
            comment: "hello".to_string(),
        };

        let json = serde_json::to_value(&comment).expect("Failed to serialize comment");
        assert_eq!(json["date"], "2024-01-10T08:30:00+00:00");

        let back: Comment = serde_json::from_value(json).expect("Failed to deserialize comment");
        assert_eq!(back, comment);
    }
}
