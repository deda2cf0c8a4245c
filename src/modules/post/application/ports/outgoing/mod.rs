pub mod post_query;
pub mod post_repository;

pub use post_query::{
    PageRequest, PageResult, PostListFilter, PostQuery, PostQueryError, PostView,
};
pub use post_repository::{NewPost, PostChanges, PostRepository, PostRepositoryError};
