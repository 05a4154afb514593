pub mod list;

pub use list::pizza_list;
