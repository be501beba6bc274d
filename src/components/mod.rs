pub mod profile_editor;
pub mod sidebar;
