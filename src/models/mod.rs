pub mod placemark;

pub use placemark::Placemark;
