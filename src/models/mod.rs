pub mod repository;

pub use repository::RepoItem;
