use timetable_parser::{
    raw_row, read_json, write_json, Day, MemorySource, RawRow, ScheduleParser, Slot,
};

fn course(code: &str, section: &str, monday: &str) -> RawRow {
    raw_row(&[
        code,
        "Data Structures",
        "3",
        "4",
        section,
        "",
        "Lecture",
        "",
        monday,
        "",
        "",
        "",
        "Main Hall",
        "12",
        "Dr. Hopper",
    ])
}

fn header() -> RawRow {
    raw_row(&[
        "Course Code",
        "Course Name",
        "Cr",
        "Ct",
        "Sec",
        "",
        "Activity",
        "Sun",
        "Mon",
        "Tue",
        "Wed",
        "Thu",
        "Building",
        "Room",
        "Staff",
    ])
}

#[test]
fn two_pages_only_first_has_header() {
    let page_one = vec![vec![
        header(),
        course("CS 210", "01", "P1"),
        course("CS 210", "02", "P2, P3"),
    ]];
    let page_two = vec![vec![
        raw_row(&["Office Hours", "Room"]),
        course("CS 999", "01", "P1"),
    ]];
    let source = MemorySource::new(vec![page_one, page_two]);

    let courses = ScheduleParser::new().parse_source(&source);
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.course_code == "CS 210"));
    assert_eq!(courses[0].section, "01");
    assert_eq!(
        courses[1].schedule,
        vec![Slot::new(Day::Mon, "P2"), Slot::new(Day::Mon, "P3")]
    );
}

#[test]
fn split_header_data_starts_two_rows_down() {
    let mut second_line = vec![None; 15];
    second_line[4] = Some("Sec".to_string());
    second_line[0] = Some("XX 000".to_string());
    second_line[1] = Some("placeholder".to_string());
    second_line[6] = Some("Lecture".to_string());
    second_line[14] = Some("Staff".to_string());

    let table = vec![header(), second_line, course("CS 310", "01", "P5")];
    let courses = ScheduleParser::new().parse_table(&table);

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].course_code, "CS 310");
}

#[test]
fn exact_header_accepts_any_course_code_prefix() {
    let parser = ScheduleParser::new();
    let table = vec![
        raw_row(&["Course Code"]),
        course("MATH 101", "01", "P1"),
        course("MATH 102", "01", "P2"),
    ];
    let courses = parser.parse_table(&table);
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[1].course_code, "MATH 102");
}

#[test]
fn tables_accumulate_in_discovery_order_without_dedup() {
    let table = vec![header(), course("CS 101", "01", "P1")];
    let source = MemorySource::new(vec![vec![table.clone(), table.clone()], vec![table]]);

    let courses = ScheduleParser::new().parse_source(&source);
    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0], courses[2]);
}

#[test]
fn export_round_trip_reproduces_records() {
    let source = MemorySource::new(vec![vec![vec![
        header(),
        course("CS 101", "01", "P1,P2"),
        course("CS 102", "03", ""),
    ]]]);
    let courses = ScheduleParser::new().parse_source(&source);
    assert_eq!(courses.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("courses.json");
    write_json(&path, &courses).unwrap();

    assert_eq!(read_json(&path).unwrap(), courses);
}
