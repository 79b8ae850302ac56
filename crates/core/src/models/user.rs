//! Player accounts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered player. Accounts are created outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub forename: String,
    pub surname: String,
    pub dob: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dob_serializes_as_calendar_date() {
        let user = User {
            id: 7,
            username: "alice".into(),
            forename: "Alice".into(),
            surname: "Liddell".into(),
            dob: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["dob"], "1990-05-17");
        assert_eq!(json["forename"], "Alice");
    }
}
