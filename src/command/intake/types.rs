// src/command/intake/types.rs

use std::time::{Duration, Instant};

use crate::host::HostAddress;
use crate::record::PatientRecord;
use crate::template::Section;

/// How long the "copied" indicator stays visible after a successful copy.
pub const COPY_FLASH_DURATION: Duration = Duration::from_secs(3);

/// Placeholder used in export filenames when the patient name is empty.
pub const UNNAMED_PATIENT: &str = "SemNome";

pub const EXPORT_FILE_PREFIX: &str = "AVANT_Paciente";
pub const EXPORT_FILE_EXT: &str = "json";

/// Navigation states: one per section, then the terminal finish step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Section(Section),
    Finish,
}

impl Step {
    pub const FIRST: Step = Step::Section(Section::Identification);
    pub const LAST_SECTION: Step = Step::Section(Section::Family);

    pub fn all() -> [Step; 6] {
        [
            Step::Section(Section::Identification),
            Step::Section(Section::Childhood),
            Step::Section(Section::Adulthood),
            Step::Section(Section::Social),
            Step::Section(Section::Family),
            Step::Finish,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Section(s) => s.tab_label(),
            Step::Finish => "Finalizar & Enviar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub step: Step,
}

impl Default for NavState {
    fn default() -> Self {
        Self { step: Step::FIRST }
    }
}

/// Which link a copy action targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyTarget {
    /// Base address without data, for sending an empty form to a new patient.
    Blank,
    /// Generated link carrying the completed answers.
    Review,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyFlash {
    pub target: CopyTarget,
    pub at: Instant,
}

/// Everything one running form owns. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    pub(crate) host: HostAddress,
    pub(crate) record: PatientRecord,
    pub(crate) nav: NavState,

    /// Set by `complete`, cleared by any later edit.
    pub(crate) completed: bool,
    pub(crate) link: Option<String>,

    /// Session started from a decoded token. Cosmetic only.
    pub(crate) review_mode: bool,

    pub(crate) copy_flash: Option<CopyFlash>,
}
