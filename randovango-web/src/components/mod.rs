pub mod card;
pub mod continue_button;
pub mod footer;
pub mod header;
pub mod map_view;
pub mod selected_services;
pub mod weather;

pub use card::{NoneOption, SelectableCard};
pub use continue_button::ContinueButton;
pub use map_view::MapView;
pub use selected_services::SelectedServices;
pub use weather::WeatherPanelView;
