pub mod intro;
pub mod bits;
pub mod converter;
pub mod files;
pub mod quiz;

pub use intro::{Introduction, Pacing};
pub use bits::BitManipulation;
pub use converter::ByteConverter;
pub use files::FileExamples;
pub use quiz::Quiz;

/// What a lesson reports back to the orchestrator after an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Stay,
    Complete,
}

impl Outcome {
    pub fn is_complete(self) -> bool {
        self == Outcome::Complete
    }
}

/// State of the single lesson currently on screen
pub enum Lesson {
    Introduction(Introduction),
    BitManipulation(BitManipulation),
    ByteConverter(ByteConverter),
    FileExamples(FileExamples),
    Quiz(Quiz),
}

impl Lesson {
    pub fn step_id(&self) -> usize {
        match self {
            Lesson::Introduction(_) => 1,
            Lesson::BitManipulation(_) => 2,
            Lesson::ByteConverter(_) => 3,
            Lesson::FileExamples(_) => 4,
            Lesson::Quiz(_) => 5,
        }
    }
}
