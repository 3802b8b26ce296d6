pub mod home;
pub mod show;
