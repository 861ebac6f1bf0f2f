pub mod actions;
pub mod app_state;
pub mod events;
pub mod print;
pub mod render;
pub mod surface;
pub mod topics;

pub use actions::ActionsService;
pub use app_state::AppState;
pub use events::EventsService;
pub use surface::DisplaySurface;
pub use surface::Element;
pub use surface::UiState;
