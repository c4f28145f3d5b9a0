pub mod startup;

pub use startup::init;
