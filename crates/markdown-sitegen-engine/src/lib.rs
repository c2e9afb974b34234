pub mod html;
pub mod io;
pub mod page;
pub mod parsing;
pub mod site;

// Re-export key types for easier usage
pub use html::{Attributes, HtmlNode};
pub use io::*;
pub use page::{TitleError, extract_title, render_page};
pub use parsing::{ParseError, markdown_to_html_node};
pub use site::{GeneratedPage, SiteError, generate_page, generate_site, render_markdown_page};

#[cfg(test)]
mod test_support;
