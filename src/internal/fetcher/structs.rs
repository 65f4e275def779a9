pub mod byte_stream;
pub mod fetcher;

pub use byte_stream::ByteStream;
pub use fetcher::Fetcher;
