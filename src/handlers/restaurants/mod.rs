pub mod delete;
pub mod list;
pub mod show;

// Re-export handler functions for use in routing
pub use delete::restaurant_delete;
pub use list::restaurant_list;
pub use show::restaurant_show;
