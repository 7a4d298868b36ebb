pub mod check;
pub mod gas;
pub mod list;
pub mod show;
pub mod verification;
pub mod views;
