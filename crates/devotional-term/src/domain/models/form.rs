use devotional_types::AgeGroup;

/// Values currently held by the generation form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub age_group: Option<AgeGroup>,
    pub topic: String,
}

/// The form control receiving keyboard input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    AgeGroup,
    Topic,
    Suggestions,
    Submit,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::AgeGroup => Focus::Topic,
            Focus::Topic => Focus::Suggestions,
            Focus::Suggestions => Focus::Submit,
            Focus::Submit => Focus::AgeGroup,
        }
    }

    pub fn previous(self) -> Focus {
        match self {
            Focus::AgeGroup => Focus::Submit,
            Focus::Topic => Focus::AgeGroup,
            Focus::Suggestions => Focus::Topic,
            Focus::Submit => Focus::Suggestions,
        }
    }
}
