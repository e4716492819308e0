pub mod csv_record_reader;
