use strum_macros::{Display, EnumIter};

/// Identity of every element the client reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ElementId {
    Header,
    GenerateButton,
    ButtonText,
    LoadingSpinner,
    ErrorMessage,
    DevotionalResult,
    DevotionalTitle,
    QuestionOfDay,
    ListenScripture,
    ListenContent,
    LearnContent,
    LiveContent,
    DevotionalPrayer,
    AgeGroupTag,
    TopicTag,
}

impl ElementId {
    /// Elements that start out hidden.
    pub fn hidden_by_default(&self) -> bool {
        matches!(
            self,
            ElementId::LoadingSpinner
                | ElementId::ErrorMessage
                | ElementId::DevotionalResult
                | ElementId::ListenScripture
                | ElementId::TopicTag
        )
    }
}
