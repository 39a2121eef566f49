mod convert;
mod post;
mod site;

pub use self::{convert::Converter, post::VuePressPost, site::VuePressSite};
