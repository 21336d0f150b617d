mod dev_source;
mod prod_source;

pub use dev_source::DevSource;
pub use prod_source::ProdSource;
