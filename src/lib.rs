pub mod api_connection;
pub mod cli;
pub mod cook_mode;
pub mod derived_view;
pub mod model;
pub mod normalizer;
pub mod nutrition;
pub mod rng;
pub mod shopping_list;
pub mod store;
