pub mod gift;
pub mod guest;
pub mod health;
pub mod party;
