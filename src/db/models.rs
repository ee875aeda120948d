use chrono::NaiveDate;
use sqlx::FromRow;

use super::value::SqlValue;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Course {
    pub id: i64,
    pub course_name: String,
    pub course_code: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub dob: Option<NaiveDate>,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_name: String,
    pub course_code: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewStudent {
    pub(crate) fn record(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("first_name", self.first_name.clone().into()),
            ("last_name", self.last_name.clone().into()),
            ("dob", self.dob.into()),
            ("email", self.email.clone().into()),
        ]
    }
}

impl NewCourse {
    pub(crate) fn record(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("course_name", self.course_name.clone().into()),
            ("course_code", self.course_code.clone().into()),
            ("description", self.description.clone().into()),
            ("category", self.category.clone().into()),
        ]
    }
}

impl NewTeacher {
    pub(crate) fn record(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("first_name", self.first_name.clone().into()),
            ("last_name", self.last_name.clone().into()),
            ("email", self.email.clone().into()),
            ("phone", self.phone.clone().into()),
        ]
    }
}
