pub mod confirmation;
pub mod health;
