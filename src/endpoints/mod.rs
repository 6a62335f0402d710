pub mod index_resource;
pub mod internal_resource;
pub mod recommend_resource;
