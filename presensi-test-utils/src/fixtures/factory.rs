use chrono::NaiveDate;
use presensi::model::{
    attendance::{AttendanceRecordDto, RecordStatus},
    class::ClassGroupDto,
    student::StudentDto,
};

/// Calendar date shorthand; panics on an invalid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn class_group(id: &str, name: &str) -> ClassGroupDto {
    ClassGroupDto {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Kelas {name}"),
        student_count: None,
    }
}

/// Student whose display name is the capitalised login
pub fn student(login: &str, class_id: &str) -> StudentDto {
    let mut name = login.to_string();
    if let Some(first) = name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }

    StudentDto {
        id: format!("siswa-{login}"),
        login: login.to_string(),
        name,
        class_id: class_id.to_string(),
    }
}

pub fn record(
    class_id: &str,
    date: NaiveDate,
    student_login: &str,
    status: impl Into<RecordStatus>,
) -> AttendanceRecordDto {
    AttendanceRecordDto {
        id: format!("presensi-{class_id}-{date}-{student_login}"),
        class_id: class_id.to_string(),
        date,
        student_login: student_login.to_string(),
        status: status.into(),
        note: String::new(),
    }
}
