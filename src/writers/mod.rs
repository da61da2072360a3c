pub mod placemark_writer;

pub use placemark_writer::PlacemarkWriter;
