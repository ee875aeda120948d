//! Column definitions for the college database, fed to `Crud::create_table`.
//!
//! Uniqueness and foreign keys are declared here and enforced by SQLite.

use super::crud::ColumnDef;

pub const STUDENT: &str = "student";
pub const COURSE: &str = "course";
pub const TEACHER: &str = "teacher";
pub const STUDENT_COURSE: &str = "student_course";
pub const TEACHER_COURSE: &str = "teacher_course";

pub const STUDENT_COLUMNS: &[ColumnDef<'static>] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("first_name", "TEXT NOT NULL"),
    ("last_name", "TEXT NOT NULL"),
    ("dob", "TEXT"), // YYYY-MM-DD
    ("email", "TEXT NOT NULL UNIQUE"),
];

pub const COURSE_COLUMNS: &[ColumnDef<'static>] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("course_name", "TEXT NOT NULL"),
    ("course_code", "TEXT NOT NULL UNIQUE"),
    ("description", "TEXT"),
    ("category", "TEXT"),
];

pub const TEACHER_COLUMNS: &[ColumnDef<'static>] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("first_name", "TEXT NOT NULL"),
    ("last_name", "TEXT NOT NULL"),
    ("email", "TEXT NOT NULL UNIQUE"),
    ("phone", "TEXT"),
];

pub const STUDENT_COURSE_COLUMNS: &[ColumnDef<'static>] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("student_id", "INTEGER NOT NULL REFERENCES student(id)"),
    ("course_id", "INTEGER NOT NULL REFERENCES course(id)"),
];

pub const TEACHER_COURSE_COLUMNS: &[ColumnDef<'static>] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("teacher_id", "INTEGER NOT NULL REFERENCES teacher(id)"),
    ("course_id", "INTEGER NOT NULL REFERENCES course(id)"),
];

/// All college tables in creation order (referenced tables first).
pub const COLLEGE_TABLES: &[(&str, &[ColumnDef<'static>])] = &[
    (STUDENT, STUDENT_COLUMNS),
    (COURSE, COURSE_COLUMNS),
    (TEACHER, TEACHER_COLUMNS),
    (STUDENT_COURSE, STUDENT_COURSE_COLUMNS),
    (TEACHER_COURSE, TEACHER_COURSE_COLUMNS),
];
