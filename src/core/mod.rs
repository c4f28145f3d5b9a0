pub mod markup;
pub mod orchestrator;
pub mod renderer;

pub use crate::domain::model::{BusinessRecord, ContainerBinding, DirectoryDocument, ItemLabels};
pub use crate::domain::ports::{Alert, ConfigProvider, DataSource, Document, Storage};
pub use crate::utils::error::Result;
