//! Row validation and field extraction.

use crate::error::RowRejection;
use crate::normalize::cell_text;
use crate::record::CourseRecord;
use crate::schedule::reconstruct_schedule;
use crate::schema::ColumnSchema;

const TBD: &str = "TBD";
const BLACKBOARD: &str = "Blackboard";

/// Turn one data row into a course record.
///
/// Short rows, blank or "total" course codes, and rows missing any of the
/// code, name, activity, section or staff fields are rejected. Building and
/// room fall back to "TBD"; a building mentioning Blackboard forces both
/// to "Blackboard".
pub fn parse_row(
    row: &[Option<String>],
    schema: &ColumnSchema,
) -> Result<CourseRecord, RowRejection> {
    let required = schema.min_cells();
    if row.len() < required {
        return Err(RowRejection::TooFewCells {
            actual: row.len(),
            required,
        });
    }

    let course_code = cell_text(row, schema.course_code);
    if course_code.is_empty() {
        return Err(RowRejection::BlankCourseCode);
    }
    if course_code.eq_ignore_ascii_case("total") {
        return Err(RowRejection::TotalRow);
    }

    let course_name = cell_text(row, schema.course_name);
    let credits = cell_text(row, schema.credits);
    let contact_hours = cell_text(row, schema.contact_hours);
    let activity = cell_text(row, schema.activity);
    let section = cell_text(row, schema.section);
    let staff = cell_text(row, schema.staff);
    let (building, room) = resolve_location(
        cell_text(row, schema.building),
        cell_text(row, schema.room),
    );

    for (name, value) in [
        ("course_name", &course_name),
        ("activity", &activity),
        ("sec", &section),
        ("staff", &staff),
    ] {
        if value.is_empty() {
            return Err(RowRejection::MissingField(name));
        }
    }

    Ok(CourseRecord {
        course_code,
        course_name,
        credits: or_default(credits, "0"),
        contact_hours: or_default(contact_hours, "0"),
        activity,
        section,
        staff,
        building: or_default(building, TBD),
        room: or_default(room, TBD),
        schedule: reconstruct_schedule(row, &schema.days),
    })
}

fn resolve_location(building: String, room: String) -> (String, String) {
    if building.to_lowercase().contains("blackboard") {
        (BLACKBOARD.to_string(), BLACKBOARD.to_string())
    } else if room == "," {
        (building, String::new())
    } else {
        (building, room)
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
