use common::model::course::Course;
use common::model::curriculum::{Lesson, LessonType, Section};
use common::ordering::MoveDirection;
use common::requests::LessonFieldPatch;

pub enum Msg {
    // load
    CourseLoaded(Course),
    Loaded(Vec<Section>),
    LoadFailed(String),
    // selection
    Select {
        section_id: String,
        lesson_id: Option<String>,
    },
    // reordering
    MoveSection(String, MoveDirection),
    MoveLesson {
        section_id: String,
        lesson_id: String,
        direction: MoveDirection,
    },
    OrdersPersisted,
    OrdersPersistFailed(String),
    // section dialog / rename / delete
    OpenSectionDialog,
    CloseSectionDialog,
    NewSectionTitle(String),
    SubmitNewSection,
    SectionCreated(Section),
    StartRenameSection(String),
    RenameTitle(String),
    SubmitRenameSection,
    CancelRenameSection,
    SectionRenamed(Section),
    DeleteSection(String),
    SectionDeleted(String),
    // lesson dialog / delete
    OpenLessonDialog,
    CloseLessonDialog,
    NewLessonTitle(String),
    NewLessonType(LessonType),
    SubmitNewLesson,
    LessonCreated {
        section_id: String,
        lesson: Lesson,
    },
    DeleteLesson(String),
    LessonDeleted(String),
    // draft editing + persistence
    DraftTitle(String),
    DraftDuration(String),
    DraftResource(String),
    DraftType(LessonType),
    TogglePreview(bool),
    PersistField(LessonFieldPatch),
    LessonPersisted(Lesson),
    LessonPersistFailed(String),
    // shared failure path for create/rename/delete calls
    RequestFailed(String),
    DismissError,
}
