pub mod fallback;
pub mod health;
pub mod index;
pub mod search;
