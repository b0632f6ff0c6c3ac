mod domain;
pub use domain::LABEL_RELEASE;
pub use domain::{Labels, ReleaseName};

mod error;
pub use error::{ModelError, ModelResult};

mod format;
pub use format::HistoryFormat;

mod policy;
pub use policy::RetentionPolicy;
