//! Parser modules for tileset definition files.
//!
//! Definition files are XML. The tokenizer is `quick-xml`; this module
//! reduces its output to start/end events and typed attribute lookups.
//!
//! # Document Structure
//!
//! ```xml
//! <tileset name="terrain" width="2" height="1" tilewidth="16" tileheight="16"
//!          background="#000000FF">
//!     <image source="grass.png" transparentcolor="#FF00FFFF"/>
//!     <text content="W" size="12" color="#FFFFFFFF"/>
//! </tileset>
//! ```

mod attributes;
mod events;

pub use attributes::Attributes;
pub use events::{Element, XmlEvent, XmlEvents};
