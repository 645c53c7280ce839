pub mod resource;
pub mod target;

pub use resource::{
    InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData, split_query,
};
pub use target::{ErrorKind, ErrorView, Link, RenderTarget, ViewState};
