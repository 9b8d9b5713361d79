mod heading;
mod index;
mod normalize;
mod parser;
mod search;
mod section;


pub use heading::{HeadingSpan, find_headings};
pub use index::{ProtocolIndex, ProtocolIndexBuilder};
pub use normalize::{join_pages, normalize};
pub use parser::SectionParser;
pub use search::lookup;
pub use section::Section;

/// Separator appended after every page when pages are concatenated
pub const PAGE_SEPARATOR: char = '\n';

/// Separator placed between body fragments that land on the same heading
pub const FRAGMENT_SEPARATOR: char = '\n';
