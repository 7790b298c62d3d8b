pub mod course;
pub mod criteria;
pub mod post;
pub mod price;
