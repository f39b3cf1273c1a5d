pub mod source_parameters;
