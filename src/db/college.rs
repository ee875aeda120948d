//! Typed college operations on top of `Crud`, plus the two analytical queries.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::crud::Crud;
use super::models::{Course, NewCourse, NewStudent, NewTeacher, Student, Teacher};
use super::schema::{self, COLLEGE_TABLES};
use crate::error::KitError;

pub struct College {
    crud: Crud,
}

impl College {
    pub async fn open(database_url: &str) -> Result<Self, KitError> {
        Ok(Self::from_crud(Crud::open(database_url).await?))
    }

    pub fn from_crud(crud: Crud) -> Self {
        Self { crud }
    }

    pub fn crud(&self) -> &Crud {
        &self.crud
    }

    pub async fn init_schema(&self) -> Result<(), KitError> {
        for (table, columns) in COLLEGE_TABLES {
            self.crud.create_table(table, columns).await?;
        }
        Ok(())
    }

    pub async fn add_student(&self, student: &NewStudent) -> Result<i64, KitError> {
        self.crud
            .insert_record(schema::STUDENT, &student.record())
            .await
    }

    pub async fn add_course(&self, course: &NewCourse) -> Result<i64, KitError> {
        self.crud.insert_record(schema::COURSE, &course.record()).await
    }

    pub async fn add_teacher(&self, teacher: &NewTeacher) -> Result<i64, KitError> {
        self.crud
            .insert_record(schema::TEACHER, &teacher.record())
            .await
    }

    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<i64, KitError> {
        self.crud
            .insert_record(
                schema::STUDENT_COURSE,
                &[
                    ("student_id", student_id.into()),
                    ("course_id", course_id.into()),
                ],
            )
            .await
    }

    pub async fn assign_teacher(&self, teacher_id: i64, course_id: i64) -> Result<i64, KitError> {
        self.crud
            .insert_record(
                schema::TEACHER_COURSE,
                &[
                    ("teacher_id", teacher_id.into()),
                    ("course_id", course_id.into()),
                ],
            )
            .await
    }

    pub async fn students(&self) -> Result<Vec<Student>, KitError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, dob, email FROM student ORDER BY id",
        )
        .fetch_all(self.crud.pool())
        .await?;
        Ok(rows)
    }

    pub async fn student_by_id(&self, id: i64) -> Result<Option<Student>, KitError> {
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, dob, email FROM student WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.crud.pool())
        .await?;
        Ok(row)
    }

    pub async fn courses(&self) -> Result<Vec<Course>, KitError> {
        let rows = sqlx::query_as::<_, Course>(
            "SELECT id, course_name, course_code, description, category FROM course ORDER BY id",
        )
        .fetch_all(self.crud.pool())
        .await?;
        Ok(rows)
    }

    pub async fn teachers(&self) -> Result<Vec<Teacher>, KitError> {
        let rows = sqlx::query_as::<_, Teacher>(
            "SELECT id, first_name, last_name, email, phone FROM teacher ORDER BY id",
        )
        .fetch_all(self.crud.pool())
        .await?;
        Ok(rows)
    }

    pub async fn rename_student(&self, id: i64, last_name: &str) -> Result<u64, KitError> {
        self.crud
            .update_record(
                schema::STUDENT,
                &[("last_name", last_name.into())],
                "id = ?",
                &[id.into()],
            )
            .await
    }

    /// Deletes the student and their enrolments.
    pub async fn remove_student(&self, id: i64) -> Result<u64, KitError> {
        self.crud
            .delete_record_by_condition(schema::STUDENT_COURSE, "student_id = ?", &[id.into()])
            .await?;
        self.crud
            .delete_record_by_condition(schema::STUDENT, "id = ?", &[id.into()])
            .await
    }

    /// Distinct students enrolled in the course; repeated enrolments count once.
    pub async fn count_students_in_course(&self, course_code: &str) -> Result<i64, KitError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT sc.student_id)
            FROM student_course sc
            JOIN course c ON c.id = sc.course_id
            WHERE c.course_code = ?
            "#,
        )
        .bind(course_code)
        .fetch_one(self.crud.pool())
        .await?;
        Ok(count)
    }

    pub async fn teachers_for_course(&self, course_code: &str) -> Result<Vec<Teacher>, KitError> {
        let rows = sqlx::query_as::<_, Teacher>(
            r#"
            SELECT DISTINCT t.id, t.first_name, t.last_name, t.email, t.phone
            FROM teacher t
            JOIN teacher_course tc ON tc.teacher_id = t.id
            JOIN course c ON c.id = tc.course_id
            WHERE c.course_code = ?
            ORDER BY t.id
            "#,
        )
        .bind(course_code)
        .fetch_all(self.crud.pool())
        .await?;
        Ok(rows)
    }

    /// Loads the sample college into an empty database. Returns `false` when
    /// students already exist. Individual insert failures are logged and skipped.
    pub async fn seed_demo(&self) -> Result<bool, KitError> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM student")
            .fetch_one(self.crud.pool())
            .await?;
        if existing > 0 {
            info!("college already has students; skipping seed");
            return Ok(false);
        }

        let mut student_ids = Vec::new();
        for (first, last, dob, email) in DEMO_STUDENTS {
            let student = NewStudent {
                first_name: first.to_string(),
                last_name: last.to_string(),
                dob: NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok(),
                email: email.to_string(),
            };
            match self.add_student(&student).await {
                Ok(id) => student_ids.push(id),
                Err(e) => warn!(email, error = %e, "seed: student insert failed"),
            }
        }

        let mut course_ids = Vec::new();
        for (name, code, description, category) in DEMO_COURSES {
            let course = NewCourse {
                course_name: name.to_string(),
                course_code: code.to_string(),
                description: Some(description.to_string()),
                category: Some(category.to_string()),
            };
            match self.add_course(&course).await {
                Ok(id) => course_ids.push(id),
                Err(e) => warn!(code, error = %e, "seed: course insert failed"),
            }
        }

        let mut teacher_ids = Vec::new();
        for (first, last, email, phone) in DEMO_TEACHERS {
            let teacher = NewTeacher {
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
                phone: Some(phone.to_string()),
            };
            match self.add_teacher(&teacher).await {
                Ok(id) => teacher_ids.push(id),
                Err(e) => warn!(email, error = %e, "seed: teacher insert failed"),
            }
        }

        // Everyone takes the first course, every second student also the next
        // one; the first student is enrolled in the first course twice.
        if let Some(&first_course) = course_ids.first() {
            for (i, &student_id) in student_ids.iter().enumerate() {
                link(self.enroll(student_id, first_course).await);
                match course_ids.get(1) {
                    Some(&second_course) if i % 2 == 1 => {
                        link(self.enroll(student_id, second_course).await);
                    }
                    _ => {}
                }
            }
            if let Some(&student_id) = student_ids.first() {
                link(self.enroll(student_id, first_course).await);
            }
        }

        for &(teacher, course) in DEMO_ASSIGNMENTS {
            if let (Some(&teacher_id), Some(&course_id)) =
                (teacher_ids.get(teacher), course_ids.get(course))
            {
                link(self.assign_teacher(teacher_id, course_id).await);
            }
        }

        info!(
            students = student_ids.len(),
            courses = course_ids.len(),
            teachers = teacher_ids.len(),
            "college seeded"
        );
        Ok(true)
    }

    pub async fn close(self) {
        self.crud.close().await;
    }
}

fn link(res: Result<i64, KitError>) {
    if let Err(e) = res {
        warn!(error = %e, "seed: link insert failed");
    }
}

const DEMO_STUDENTS: &[(&str, &str, &str, &str)] = &[
    ("Aroha", "Walker", "1995-10-23", "aroha.walker@college.example"),
    ("Ben", "Taylor", "2000-11-11", "ben.taylor@college.example"),
    ("Chloe", "Ngata", "2001-11-12", "chloe.ngata@college.example"),
    ("Daniel", "Perera", "2002-08-13", "daniel.perera@college.example"),
    ("Emma", "Wilson", "2003-09-14", "emma.wilson@college.example"),
    ("Finn", "Brown", "1985-08-13", "finn.brown@college.example"),
    ("Grace", "Doe", "2000-01-01", "grace.doe@college.example"),
];

const DEMO_COURSES: &[(&str, &str, &str, &str)] = &[
    (
        "Professional Software Development",
        "MSE800",
        "Software engineering practice, tooling and testing",
        "Software Engineering",
    ),
    (
        "Data Analytics Foundations",
        "MSE801",
        "Statistics, SQL and visualisation",
        "Data Analytics",
    ),
    (
        "Applied Machine Learning",
        "MSE802",
        "Supervised learning in practice",
        "Artificial Intelligence",
    ),
];

const DEMO_TEACHERS: &[(&str, &str, &str, &str)] = &[
    ("Hana", "Kim", "hana.kim@college.example", "021 555 0101"),
    ("Ian", "Smith", "ian.smith@college.example", "021 555 0102"),
    ("Jade", "Li", "jade.li@college.example", "021 555 0103"),
];

/// `(teacher index, course index)` into the lists above.
const DEMO_ASSIGNMENTS: &[(usize, usize)] = &[(0, 0), (1, 0), (1, 1), (2, 2)];
