pub mod a001_application;
pub mod a002_repo_app_details;
