mod reporter;

pub use reporter::Reporter;
