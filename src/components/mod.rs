pub mod about;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod menu;
pub mod practical_info;
pub mod reservation;
pub mod reviews_list;
