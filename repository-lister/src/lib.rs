#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod branches;
pub mod discovery;
pub mod filter;
pub mod formatter;
pub mod github;
pub mod outputs;
pub mod runner;
pub mod summary;

pub use branches::{
    probe_branches, probe_repository, BranchMatch, ProbeOutcome, ProbeReport, ProbeWarning,
};
pub use discovery::{
    discover_repositories, Discovery, DiscoveryError, DiscoveryOptions, OwnerMode, PageCursor,
    RepositoryRecord, DEFAULT_MAX_REPOSITORIES, MAX_PER_PAGE,
};
pub use filter::{filter_repositories, ForkPolicy, UnknownPolicy, VisibilityPolicy};
pub use formatter::{format_repositories, NamedRepository, OutputFormat, UnknownFormat};
pub use github::{Branch, GitHubHost, HostError, RepositoryHost};
pub use outputs::{OutputError, OutputSink};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{create_handlebars_registry, RunSummary, SummaryError, SummaryRenderer};
