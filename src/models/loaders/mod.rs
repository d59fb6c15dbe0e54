pub mod html_loader;

pub use html_loader::{find_html_files, load_html_document, output_path_for};
