mod comment_repository;
mod user_repository;

pub use comment_repository::CommentRepository;
pub use user_repository::UserRepository;
