use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{normalize_code, UnknownCode};

/// Recurrence of a preventive maintenance task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }

    pub fn all() -> Vec<Frequency> {
        vec![
            Frequency::Daily,
            Frequency::Weekly,
            Frequency::Monthly,
            Frequency::Quarterly,
            Frequency::Yearly,
        ]
    }

    pub fn from_code(raw: &str) -> Option<Self> {
        match normalize_code(raw).as_str() {
            "daily" => Some(Frequency::Daily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "quarterly" => Some(Frequency::Quarterly),
            "yearly" | "annual" | "annually" => Some(Frequency::Yearly),
            _ => None,
        }
    }

    /// Fixed interval the server uses when a schedule is completed.
    /// Months and years are approximated (30 / 90 / 365 days).
    pub fn interval_days(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
            Frequency::Monthly => 30,
            Frequency::Quarterly => 90,
            Frequency::Yearly => 365,
        }
    }

    /// Next due date if the task were completed on `completed_on`.
    pub fn next_due_after(&self, completed_on: NaiveDate) -> NaiveDate {
        completed_on + Duration::days(self.interval_days())
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Monthly
    }
}

impl TryFrom<String> for Frequency {
    type Error = UnknownCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Frequency::from_code(&value).ok_or(UnknownCode {
            kind: "frequency",
            value,
        })
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_due_after() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        assert_eq!(
            Frequency::Weekly.next_due_after(day),
            NaiveDate::from_ymd_opt(2025, 2, 7).unwrap()
        );
        assert_eq!(
            Frequency::Monthly.next_due_after(day),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
    }

    #[test]
    fn test_capitalized_codes_accepted() {
        let parsed: Frequency = serde_json::from_str("\"Monthly\"").unwrap();
        assert_eq!(parsed, Frequency::Monthly);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"monthly\"");
    }
}
