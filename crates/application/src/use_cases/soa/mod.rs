pub mod bump_serial;

pub use bump_serial::BumpSoaSerialUseCase;
