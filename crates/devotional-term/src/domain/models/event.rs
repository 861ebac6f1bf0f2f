use devotional_types::Devotional;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TopicsLoaded(Vec<String>),
    DevotionalGenerated(Devotional),
    GenerationFailed,
    ServiceUnreachable(String),
    KeyboardBackTab,
    KeyboardBackspace,
    KeyboardCTRLC,
    KeyboardCTRLN,
    KeyboardCTRLP,
    KeyboardChar(char),
    KeyboardEnter,
    KeyboardLeft,
    KeyboardPaste(String),
    KeyboardRight,
    KeyboardTab,
    UITick,
    UIScrollDown,
    UIScrollUp,
}
