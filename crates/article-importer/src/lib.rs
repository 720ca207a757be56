pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod request;
pub mod session;
pub mod transport;
pub mod view;
pub mod workflow;

pub use catalog::{derive_option_levels, CategoryCascade, CategoryNode, CategoryOption, CategoryTree};
pub use config::{load_config, load_default_config, ImporterConfig};
pub use error::{CatalogError, ConfigError, ImporterError, Result};
pub use events::{SubmissionBroadcaster, SubmissionEvent, SubmissionEventKind};
pub use request::{ImportRequest, SizeLimits, ValidationErrors};
pub use session::{FormEvent, ImportSession};
pub use transport::{ArticleTransport, HttpTransport, TransportError};
pub use view::FormView;
pub use workflow::{ImportWorkflow, SubmissionOutcome, SubmitAttempt};
