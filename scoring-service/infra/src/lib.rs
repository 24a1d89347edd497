mod probe;
mod process;
mod transcoder;
mod transcriber;

#[cfg(test)]
mod test_support;

pub use probe::FfprobeDurationProbe;
pub use process::{ToolError, ToolOutput, ToolRunner};
pub use transcoder::FfmpegTranscoder;
pub use transcriber::WhisperCliTranscriber;
