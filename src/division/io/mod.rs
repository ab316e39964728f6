pub mod result_file;
