pub mod controller;
pub mod mobile_picker;
pub mod tabs_section;

pub use controller::TabsController;
pub use mobile_picker::MobileTabPicker;
pub use tabs_section::TabsSection;
