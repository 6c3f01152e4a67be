use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::content::{
    FILE_EXAMPLES, FileExample, INTRO_QUESTIONS, IntroQuestion, QUIZ_QUESTIONS, QuizQuestion, STEPS,
    Step,
};
use crate::lessons::files::{StorageTier, fits_in_email, storage_tiers};
use crate::units::{bytes_to_bits, format_size};

/// File example with every value the gallery derives from it
#[derive(Serialize)]
pub struct FileExampleFormatted {
    pub name: &'static str,
    pub description: &'static str,
    pub size_bytes: u64,
    pub size_bits: u64,
    pub formatted_size: String,
    pub storage_tiers: Vec<StorageTier>,
    pub fits_in_email: bool,
}

impl From<&FileExample> for FileExampleFormatted {
    fn from(example: &FileExample) -> Self {
        FileExampleFormatted {
            name: example.name,
            description: example.description,
            size_bytes: example.size_bytes,
            size_bits: bytes_to_bits(example.size_bytes),
            formatted_size: format_size(example.size_bytes),
            storage_tiers: storage_tiers(example.size_bytes),
            fits_in_email: fits_in_email(example.size_bytes),
        }
    }
}

#[derive(Serialize)]
pub struct CourseExport {
    pub generated_at: DateTime<Utc>,
    pub steps: &'static [Step],
    pub intro_questions: &'static [IntroQuestion],
    pub quiz_questions: &'static [QuizQuestion],
    pub file_examples: Vec<FileExampleFormatted>,
}

pub fn course_export() -> CourseExport {
    CourseExport {
        generated_at: Utc::now(),
        steps: &STEPS,
        intro_questions: &INTRO_QUESTIONS,
        quiz_questions: &QUIZ_QUESTIONS,
        file_examples: FILE_EXAMPLES.iter().map(FileExampleFormatted::from).collect(),
    }
}

pub fn course_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&course_export())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_contains_derived_values() {
        let json: serde_json::Value = serde_json::from_str(&course_json().unwrap()).unwrap();
        assert_eq!(json["steps"].as_array().unwrap().len(), 5);
        assert_eq!(json["quiz_questions"].as_array().unwrap().len(), 6);

        let movie = &json["file_examples"][3];
        assert_eq!(movie["name"], "Film HD");
        assert_eq!(movie["size_bits"], 34_359_738_368u64);
        assert_eq!(movie["formatted_size"], "4.00 Go");
        assert_eq!(movie["storage_tiers"][0], "Drive");
        assert_eq!(movie["fits_in_email"], false);
        assert!(json["generated_at"].is_string());
    }
}
