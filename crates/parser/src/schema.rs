//! Fixed column positions and parser configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching days covered by a timetable, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
}

impl Day {
    pub const ALL: [Day; 5] = [Day::Sun, Day::Mon, Day::Tue, Day::Wed, Day::Thu];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Sun => "Sun",
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell index of every field in a timetable data row.
///
/// Position is the only addressing mechanism a raw table has, so the schema
/// is fixed when the parser is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub course_code: usize,
    pub course_name: usize,
    pub credits: usize,
    pub contact_hours: usize,
    pub section: usize,
    pub activity: usize,
    pub building: usize,
    pub room: usize,
    pub staff: usize,
    /// Period columns, one per day, in output order.
    pub days: [(Day, usize); 5],
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            course_code: 0,
            course_name: 1,
            credits: 2,
            contact_hours: 3,
            section: 4,
            activity: 6,
            building: 12,
            room: 13,
            staff: 14,
            days: [
                (Day::Sun, 7),
                (Day::Mon, 8),
                (Day::Tue, 9),
                (Day::Wed, 10),
                (Day::Thu, 11),
            ],
        }
    }
}

impl ColumnSchema {
    /// Minimum number of cells a candidate data row must carry.
    #[must_use]
    pub fn min_cells(&self) -> usize {
        let scalar = [
            self.course_code,
            self.course_name,
            self.credits,
            self.contact_hours,
            self.section,
            self.activity,
            self.building,
            self.room,
            self.staff,
        ];
        let widest = scalar
            .into_iter()
            .chain(self.days.iter().map(|(_, index)| *index))
            .max()
            .unwrap_or(0);
        widest + 1
    }
}

/// Options controlling how tables are interpreted.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub schema: ColumnSchema,
    /// Course-code prefixes the lenient header fallback recognises on the
    /// row right below a "Course Code" row.
    pub course_prefixes: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            schema: ColumnSchema::default(),
            course_prefixes: vec!["CS ".to_string()],
        }
    }
}

impl ParserOptions {
    /// Replace the lenient-fallback prefixes. An empty list keeps the defaults.
    #[must_use]
    pub fn with_course_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        if !prefixes.is_empty() {
            self.course_prefixes = prefixes;
        }
        self
    }
}
