use crate::schema::Day;
use serde::{Deserialize, Serialize};

/// One scheduled occurrence of a course offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub period: String,
}

impl Slot {
    pub fn new(day: Day, period: impl Into<String>) -> Self {
        Self {
            day,
            period: period.into(),
        }
    }
}

/// A normalized course offering extracted from one timetable row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course_code: String,
    pub course_name: String,
    /// Credit value; "0" when the cell was blank.
    pub credits: String,
    /// Weekly contact hours; "0" when the cell was blank.
    pub contact_hours: String,
    pub activity: String,
    #[serde(rename = "sec")]
    pub section: String,
    pub staff: String,
    /// "TBD" when unknown, "Blackboard" for online offerings.
    pub building: String,
    pub room: String,
    pub schedule: Vec<Slot>,
}
