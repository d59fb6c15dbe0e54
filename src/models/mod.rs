pub mod loaders;
pub mod question;

pub use loaders::{find_html_files, load_html_document, output_path_for};
pub use question::{QuestionRecord, DEFAULT_ANSWER_PREFIX};
