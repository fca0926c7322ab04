pub mod accordion;
pub mod contact;
pub mod menu;
pub mod picker;
pub mod shortcuts;
pub mod site;
pub mod slider;
pub mod tabs;
