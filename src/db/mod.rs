//! Database module: a table-agnostic CRUD wrapper and the college schema on top.
//!
//! Layout:
//! - `crud.rs`: dynamic create/insert/select/update/delete over SQLite
//! - `value.rs`: dynamically-typed values and rows used by `crud`
//! - `schema.rs`: college table definitions
//! - `models.rs`: Rust structs mirroring college rows
//! - `college.rs`: typed college operations and analytics

pub mod college;
pub mod crud;
pub mod models;
pub mod schema;
pub mod value;

pub use college::College;
pub use crud::{ColumnDef, Crud};
pub use models::{Course, NewCourse, NewStudent, NewTeacher, Student, Teacher};
pub use value::{DbRow, SqlValue};
