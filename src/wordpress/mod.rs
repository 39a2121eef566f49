mod client;
mod models;
mod mysql;
mod post_query;

pub use self::{
    client::WordPress,
    models::WordPressPost,
    mysql::{Db, connect},
    post_query::PostQuery,
};
