pub mod load;

pub use load::load_menu;
