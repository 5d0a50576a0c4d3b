pub mod answers;
pub mod server;

pub use server::QuartzDnsHandler;
