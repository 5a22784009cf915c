mod field_backdrop;

pub use field_backdrop::FieldBackdrop;
