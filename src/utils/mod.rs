pub mod csv_reader;
pub mod password;
