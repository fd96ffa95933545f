use common::model::course::{Course, CourseStatus};
use common::model::page::Page;

pub enum Msg {
    // list
    Load,
    Loaded(Page<Course>),
    LoadFailed(String),
    SetStatusFilter(String),
    SetSearch(String),
    Search,
    PrevPage,
    NextPage,
    // form
    OpenCreate,
    OpenEdit(String),
    CloseForm,
    Field(FormField),
    Submit,
    Saved(Course),
    SaveFailed(String),
    // delete
    Delete(String),
    Deleted(String),
    RequestFailed(String),
    DismissError,
}

/// One edited field of the course form.
pub enum FormField {
    Title(String),
    Category(String),
    CategoryOther(String),
    Status(CourseStatus),
    IsFree(bool),
    Price(String),
    Discount(String),
    Description(String),
    ShortDescription(String),
    ThumbnailUrl(String),
}
