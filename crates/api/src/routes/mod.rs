pub mod health;
pub mod page;
