pub mod custom;
pub mod eggs;
pub mod error;
pub mod info;
pub mod lookup;
pub mod markup;
pub mod sanitize;
pub mod similar;
pub mod state;
pub mod tools;
pub mod transform;
pub mod words;

pub use custom::{CustomDefinition, CustomDefinitions};
pub use eggs::{Dispatch, EasterEgg};
pub use error::{CustomDefinitionError, LookupError, ToolError};
pub use lookup::{Lookup, LookupResult};
pub use markup::{MarkupDialect, Palette};
pub use sanitize::sanitize;
pub use similar::render_similar;
pub use state::SearchSession;
pub use tools::{CommandOutput, CommandRunner, SystemRunner, Tools};
pub use transform::render_definition;
pub use words::WordList;
