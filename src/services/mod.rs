pub mod carousel;
pub mod comments;
pub mod export;
pub mod gallery;
pub mod session;
