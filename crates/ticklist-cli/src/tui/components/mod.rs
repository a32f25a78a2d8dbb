pub mod footer;
pub mod input;
pub mod todo_list;
