pub mod csv;

pub use csv::load_records;
