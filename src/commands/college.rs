use clap::{Args, Subcommand, ValueEnum};
use std::io::Write;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::schema::{COURSE, STUDENT, STUDENT_COURSE, TEACHER, TEACHER_COURSE};
use crate::db::{College, DbRow, SqlValue};
use crate::error::KitError;

#[derive(Args, Debug)]
pub struct CollegeCommand {
    /// Database URL; overrides `basic.database_url`
    #[arg(long)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub action: CollegeAction,
}

#[derive(Subcommand, Debug)]
pub enum CollegeAction {
    /// Create the college tables
    Init,
    /// Create the tables and load the sample college
    Seed,
    /// Seed, then run the fetch/update/delete walkthrough
    Demo,
    /// Print every row of a table
    List {
        #[arg(value_enum)]
        table: Table,
    },
    /// Distinct student count and teachers of a course
    Stats { course_code: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Student,
    Course,
    Teacher,
    StudentCourse,
    TeacherCourse,
}

impl Table {
    fn name(self) -> &'static str {
        match self {
            Table::Student => STUDENT,
            Table::Course => COURSE,
            Table::Teacher => TEACHER,
            Table::StudentCourse => STUDENT_COURSE,
            Table::TeacherCourse => TEACHER_COURSE,
        }
    }
}

impl CollegeCommand {
    pub async fn run(self, cfg: &Config) -> Result<(), KitError> {
        self.run_to(cfg, &mut std::io::stdout()).await
    }

    /// Runs the action, writing its report to `out`. Database failures are
    /// logged and the action carries on with what it has.
    pub async fn run_to<W: Write>(self, cfg: &Config, out: &mut W) -> Result<(), KitError> {
        let url = self.db.as_deref().unwrap_or(&cfg.basic.database_url);
        let college = College::open(url).await?;
        info!(database_url = %url, "college database opened");

        if let Err(e) = college.init_schema().await {
            warn!(error = %e, "schema creation failed");
        }

        let res = match self.action {
            CollegeAction::Init => writeln!(out, "College tables ready.").map_err(KitError::from),
            CollegeAction::Seed => seed(&college, out).await,
            CollegeAction::Demo => match seed(&college, out).await {
                Ok(()) => demo(&college, out).await,
                Err(e) => Err(e),
            },
            CollegeAction::List { table } => {
                let rows = fetch_all(&college, table.name()).await;
                print_rows(out, table.name(), &rows)
            }
            CollegeAction::Stats { course_code } => stats(&college, &course_code, out).await,
        };

        college.close().await;
        res
    }
}

async fn seed<W: Write>(college: &College, out: &mut W) -> Result<(), KitError> {
    match college.seed_demo().await {
        Ok(true) => writeln!(out, "Sample college loaded.")?,
        Ok(false) => writeln!(out, "Database already has students; sample data not loaded.")?,
        Err(e) => warn!(error = %e, "seeding failed"),
    }
    Ok(())
}

/// Fetch all, fetch id 3, rename id 2, delete id 7, fetch all again.
async fn demo<W: Write>(college: &College, out: &mut W) -> Result<(), KitError> {
    let crud = college.crud();

    print_rows(out, "All students", &fetch_all(college, STUDENT).await)?;

    let student = crud
        .fetch_by_condition(STUDENT, "id = ?", &[SqlValue::from(3_i64)])
        .await
        .unwrap_or_else(|e| {
            warn!(table = STUDENT, error = %e, "fetch by id failed");
            Vec::new()
        });
    print_rows(out, "Student with ID 3", &student)?;

    match college.rename_student(2, "Fernando").await {
        Ok(rows) => info!(rows, "student 2 renamed"),
        Err(e) => warn!(error = %e, "update failed"),
    }
    match college.remove_student(7).await {
        Ok(rows) => info!(rows, "student 7 removed"),
        Err(e) => warn!(error = %e, "delete failed"),
    }

    print_rows(out, "All students", &fetch_all(college, STUDENT).await)
}

async fn stats<W: Write>(college: &College, course_code: &str, out: &mut W) -> Result<(), KitError> {
    match college.count_students_in_course(course_code).await {
        Ok(count) => writeln!(out, "Students enrolled in {course_code}: {count}")?,
        Err(e) => warn!(course_code, error = %e, "student count failed"),
    }
    match college.teachers_for_course(course_code).await {
        Ok(teachers) if teachers.is_empty() => {
            writeln!(out, "No teachers assigned to {course_code}.")?;
        }
        Ok(teachers) => {
            writeln!(out, "Teachers for {course_code}:")?;
            for t in teachers {
                writeln!(out, "  {} {} <{}>", t.first_name, t.last_name, t.email)?;
            }
        }
        Err(e) => warn!(course_code, error = %e, "teacher lookup failed"),
    }
    Ok(())
}

async fn fetch_all(college: &College, table: &str) -> Vec<DbRow> {
    college.crud().fetch_all(table).await.unwrap_or_else(|e| {
        warn!(table, error = %e, "fetch failed");
        Vec::new()
    })
}

fn print_rows<W: Write>(out: &mut W, label: &str, rows: &[DbRow]) -> Result<(), KitError> {
    writeln!(out, "{label}:")?;
    for row in rows {
        writeln!(out, "  {row}")?;
    }
    Ok(())
}
