pub mod import_csv;
