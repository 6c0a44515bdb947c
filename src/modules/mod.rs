pub mod category;
pub mod reply;
pub mod topic;
pub mod user;
