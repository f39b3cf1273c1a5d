pub mod a001_application;
