mod error;
pub use error::{ExecError, ExecResult};

mod capture;
pub use capture::run_capture;

mod source;
pub use source::{Fetch, HelmSource, KubectlSource};

mod gather;
pub use gather::fetch_pair;

mod delete;
pub use delete::{DeleteOutcome, HelmDelete};
