//! Mock contact form: submit swaps in a success message, a timer swaps the
//! empty form back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormView {
    pub form_visible: bool,
    pub success_visible: bool,
    /// Clear the fields when applying this view.
    pub clear_fields: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    phase: FormPhase,
    submissions: u32,
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Nothing is sent anywhere; the caller must prevent the native submit.
    pub fn submit(&mut self) -> FormView {
        self.phase = FormPhase::Submitted;
        self.submissions += 1;
        FormView {
            form_visible: false,
            success_visible: true,
            clear_fields: false,
        }
    }

    /// Called when the reset delay elapses.
    pub fn reset(&mut self) -> FormView {
        self.phase = FormPhase::Editing;
        FormView {
            form_visible: true,
            success_visible: false,
            clear_fields: true,
        }
    }
}
