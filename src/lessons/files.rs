use serde::Serialize;

use super::Outcome;
use crate::content::FileExample;

pub const GIB: u64 = 1024 * 1024 * 1024;
pub const TIB: u64 = 1024 * GIB;
pub const EMAIL_LIMIT_BYTES: u64 = 25 * 1024 * 1024;

/// Storage medium suggested for a file size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StorageTier {
    LargeDrive,
    MediumDrive,
    Drive,
    UsbKey,
}

impl StorageTier {
    pub fn label(self) -> &'static str {
        match self {
            StorageTier::LargeDrive => "Un disque dur ou SSD de grande capacité (1 To ou plus)",
            StorageTier::MediumDrive => "Un disque dur ou SSD de taille moyenne (100 Go ou plus)",
            StorageTier::Drive => "Un disque dur ou SSD",
            StorageTier::UsbKey => "Une clé USB standard",
        }
    }
}

/// Tiers whose condition holds for `size`.
///
/// Conditions are checked independently, so sizes between 100 Mo and 4 Go
/// get no suggestion at all.
pub fn storage_tiers(size: u64) -> Vec<StorageTier> {
    let mut tiers = Vec::new();
    if size >= TIB {
        tiers.push(StorageTier::LargeDrive);
    }
    if (100 * GIB..TIB).contains(&size) {
        tiers.push(StorageTier::MediumDrive);
    }
    if (4 * GIB..100 * GIB).contains(&size) {
        tiers.push(StorageTier::Drive);
    }
    if size <= 100 * 1024 * 1024 {
        tiers.push(StorageTier::UsbKey);
    }
    tiers
}

pub fn fits_in_email(size: u64) -> bool {
    size <= EMAIL_LIMIT_BYTES
}

pub struct FileExamples {
    examples: &'static [FileExample],
    selected: Option<usize>,
    pub cursor: usize,
}

impl FileExamples {
    pub fn new(examples: &'static [FileExample]) -> Self {
        FileExamples {
            examples,
            selected: None,
            cursor: 0,
        }
    }

    pub fn examples(&self) -> &'static [FileExample] {
        self.examples
    }

    pub fn selected(&self) -> Option<&'static FileExample> {
        self.selected.and_then(|i| self.examples.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Record a selection and reveal its explanation panel
    pub fn select_example(&mut self, index: usize) {
        if index < self.examples.len() {
            self.selected = Some(index);
            self.cursor = index;
        }
    }

    pub fn select_cursor(&mut self) {
        self.select_example(self.cursor);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.examples.len() {
            self.cursor += 1;
        }
    }

    /// The gallery never blocks the learner
    pub fn complete(&self) -> Outcome {
        Outcome::Complete
    }
}
