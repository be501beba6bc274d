pub mod home;
pub mod printer_profiles;
