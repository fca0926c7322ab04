pub mod header;
pub mod mega_menu;
pub mod menu_link;
pub mod mobile_menu;
pub mod nav_buttons;

pub use header::Header;
pub use mega_menu::MegaMenu;
pub use mobile_menu::MobileMenu;
pub use nav_buttons::NavButtons;
