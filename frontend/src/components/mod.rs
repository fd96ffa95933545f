pub mod courses;
pub mod curriculum;
pub mod notify;
pub mod top_sheet;
pub mod validate;
