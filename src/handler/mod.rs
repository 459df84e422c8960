pub mod badge;
pub mod health;
