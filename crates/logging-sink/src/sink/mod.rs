mod message_sink;
mod outputs;

pub use message_sink::{BoxedWriter, MessageSink};
pub use outputs::TierOutputs;
