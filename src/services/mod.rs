pub mod output_writer;
pub mod question_extractor;

pub use output_writer::OutputWriter;
pub use question_extractor::QuestionExtractor;
