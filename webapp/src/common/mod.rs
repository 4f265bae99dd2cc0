pub mod dom;
pub mod effects;
pub mod providers;
pub mod storage;
pub mod style;
